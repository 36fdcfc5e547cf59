#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use reportlint_markdown::{
  RoleHint,
  Severity,
  TOP_LEVEL_SECTION,
  Verdict,
  are_findings_sorted,
  find_section,
  find_table,
  parse,
};

const SECURITY_REPORT: &str = r#"## Security Review Verdict: FAIL

### Summary

Two blocking issues were found in the payment service.

### Findings

#### [CRITICAL] Hardcoded Stripe key
- **CWE:** CWE-798
- **Location:** `src/payments/client.rs:14`
- **Description:** A live secret key is committed to the repository and
  shipped in every build.
- **Remediation:** Load the key from the environment.

```rust
const KEY: &str = "sk_live_...";
```

#### [HIGH] Missing CSRF protection
- **Category:** A01:2021 Broken Access Control
- **Location:** `src/routes/refund.rs`

---

### Secrets Scan

| File | Secret | Status |
|------|--------|--------|
| src/payments/client.rs | Stripe key | Exposed |
"#;

#[test]
fn test_strict_security_verdict_and_cwe() {
  let doc = parse(
    "## Security Review Verdict: FAIL\n\n#### [CRITICAL] Hardcoded Key\n- \
     **CWE:** CWE-798\n",
  );
  assert_eq!(doc.verdict, Some(Verdict::Fail));
  assert_eq!(doc.findings.len(), 1);
  assert_eq!(doc.findings[0].severity, Severity::Critical);
  assert_eq!(doc.findings[0].cwe_reference.as_deref(), Some("CWE-798"));
}

#[test]
fn test_sort_order_of_two_findings() {
  let sorted = parse("#### [CRITICAL] A\n\n#### [HIGH] B\n");
  assert!(are_findings_sorted(&sorted.findings));

  let reversed = parse("#### [HIGH] B\n\n#### [CRITICAL] A\n");
  assert!(!are_findings_sorted(&reversed.findings));
}

#[test]
fn test_table_under_coverage_report() {
  let doc = parse("## Coverage Report\n| A | B |\n|---|---|\n| 1 | 2 |\n");
  assert_eq!(doc.tables.len(), 1);
  let table = &doc.tables[0];
  assert_eq!(table.headers, vec!["A", "B"]);
  assert_eq!(table.rows, vec![vec!["1", "2"]]);
  assert_eq!(table.section_title, "Coverage Report");
}

#[test]
fn test_full_security_report() {
  let doc = parse(SECURITY_REPORT);

  assert_eq!(doc.verdict, Some(Verdict::Fail));
  assert_eq!(
    doc.verdict_line.as_deref(),
    Some("## Security Review Verdict: FAIL")
  );
  assert_eq!(doc.role_hint, RoleHint::Security);

  assert_eq!(doc.findings.len(), 2);
  let key = &doc.findings[0];
  assert!(key.has_code_block);
  assert_eq!(
    key.field("Description"),
    Some(
      "A live secret key is committed to the repository and shipped in \
       every build."
    )
  );
  let csrf = &doc.findings[1];
  assert_eq!(csrf.severity, Severity::High);
  assert!(!csrf.has_code_block);
  assert_eq!(csrf.cwe_reference, None);
  assert!(csrf.has_field("Location"));

  let findings = find_section(&doc.sections, "Findings").expect("findings");
  assert!(findings.content.contains("#### [CRITICAL] Hardcoded Stripe key"));
  assert!(!findings.content.contains("sk_live"));
  assert!(findings.full_content().contains("sk_live"));

  let secrets = find_table(&doc.tables, "secrets").expect("secrets table");
  assert_eq!(secrets.headers, vec!["File", "Secret", "Status"]);
  assert_eq!(secrets.rows.len(), 1);
}

#[test]
fn test_flexible_findings_and_emoji_verdict() {
  let doc = parse(
    "# 🔴 TERRAFORM PLAN REVIEW — FAIL\n\n### 🔴 CRITICAL-1: Public bucket\n- \
     **Resource:** aws_s3_bucket.logs\n\n### 🟠 P2: Missing tags\n\n### 🔵 \
     Drift\n**Severity: MEDIUM**\n",
  );
  assert_eq!(doc.verdict, Some(Verdict::Fail));
  let severities: Vec<Severity> =
    doc.findings.iter().map(|f| f.severity).collect();
  assert_eq!(severities, vec![
    Severity::Critical,
    Severity::Medium,
    Severity::Medium
  ]);
  assert_eq!(doc.findings[0].title, "CRITICAL-1: Public bucket");
}

#[test]
fn test_boundary_inputs() {
  let doc = parse("");
  assert!(doc.sections.is_empty());
  assert!(doc.findings.is_empty());
  assert!(doc.tables.is_empty());
  assert!(doc.verdict.is_none());
  assert_eq!(doc.role_hint, RoleHint::Unknown);

  assert!(parse("### 🟣 Not a finding\n").findings.is_empty());
  assert!(parse("| A | B |\n| 1 | 2 |\n").tables.is_empty());
}

#[test]
fn test_crlf_input() {
  let doc = parse("## Summary\r\nok\r\n\r\n| A |\r\n|---|\r\n| 1 |\r\n");
  assert_eq!(doc.sections[0].title, "Summary");
  assert_eq!(doc.tables[0].rows, vec![vec!["1"]]);
}

#[test]
fn test_table_without_heading_is_top_level() {
  let doc = parse("| A |\n|---|\n| 1 |\n");
  assert_eq!(doc.tables[0].section_title, TOP_LEVEL_SECTION);
}

#[test]
fn test_serializes_to_json() {
  let doc = parse("## Verdict: PASS\n#### [LOW] Nit\n- **Location:** x\n");
  let json = serde_json::to_value(&doc).expect("serialize");
  assert_eq!(json["verdict"], "PASS");
  assert_eq!(json["role_hint"], "unknown");
  assert_eq!(json["findings"][0]["severity"], "LOW");
  assert_eq!(json["findings"][0]["fields"]["Location"], "x");
}
