#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Fine in benchmarks"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reportlint_markdown::{are_findings_sorted, parse};

const SMALL: &str = "\
## Security Review Verdict: WARN

### Summary

One medium issue in the session handling.

#### [MEDIUM] Session cookie missing SameSite
- **CWE:** CWE-1275
- **Location:** src/session.rs:42
- **Remediation:** Set `SameSite=Lax`.
";

/// Build a report with `n` findings spread over a few sections, plus a table
/// per section.
fn large_report(n: usize) -> String {
  let mut out = String::from("# Terraform Plan Review\n\n## Verdict: FAIL\n\n");
  for section in 0..4 {
    out.push_str(&format!("## Section {section}\n\nSome prose.\n\n"));
    out.push_str("| Resource | Action | Cost |\n|---|---|---|\n");
    for row in 0..10 {
      out.push_str(&format!("| aws_instance.r{row} | create | ${row}.00 |\n"));
    }
    out.push('\n');
    for i in 0..n / 4 {
      let emoji = ["🔴", "🟠", "🟡", "🔵"][i % 4];
      out.push_str(&format!(
        "### {emoji} Finding {section}-{i}\n- **Resource:** \
         aws_s3_bucket.b{i}\n- **Risk:** data exposure\n  continued on the \
         next line\n- **Recommendation:** fix it\n\n```hcl\nacl = \
         \"private\"\n```\n\n"
      ));
    }
  }
  out
}

fn bench_parse(c: &mut Criterion) {
  let mut group = c.benchmark_group("parse");

  group.bench_with_input(BenchmarkId::new("report", "small"), &SMALL, |b, text| {
    b.iter(|| parse(black_box(text)));
  });

  for n in [40, 400] {
    let text = large_report(n);
    group.bench_with_input(
      BenchmarkId::new("report", n),
      &text,
      |b, text| {
        b.iter(|| parse(black_box(text)));
      },
    );
  }

  group.finish();
}

fn bench_severity(c: &mut Criterion) {
  let doc = parse(&large_report(400));
  c.bench_function("are_findings_sorted", |b| {
    b.iter(|| are_findings_sorted(black_box(&doc.findings)));
  });
}

criterion_group!(benches, bench_parse, bench_severity);
criterion_main!(benches);
