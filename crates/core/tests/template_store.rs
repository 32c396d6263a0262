use lexvoice_core::extract::{extract, merge};
use lexvoice_core::templates::repository::{TemplateRepoError, TemplateRepository};
use lexvoice_core::templates::seed::write_builtin;
use lexvoice_core::templates::{TemplateRenderError, VariableMapping, generate_document};
use std::fs;
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> VariableMapping {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn seeded_store_lists_and_loads_templates() {
    let tmp = tempdir().unwrap();
    write_builtin(tmp.path(), false).unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let names: Vec<String> = repo.list_active().unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["affidavit", "rental_agreement"]);

    let rental = repo.get_by_name("rental_agreement").unwrap();
    assert_eq!(rental.variables.len(), 15);
    assert_eq!(rental.variables[0].label, "Agreement Date");
}

#[test]
fn inactive_templates_are_hidden_but_loadable() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("old_notice.md"),
        "---\ncategory: notice\nis_active: false\n---\nOld {{x}}",
    )
    .unwrap();
    fs::write(tmp.path().join("notice.md"), "---\ncategory: notice\n---\nNew").unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    assert_eq!(repo.list_all().unwrap().len(), 2);

    let active = repo.list_active().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "notice");

    assert!(!repo.get_by_name("old_notice").unwrap().is_active);
}

#[test]
fn lookup_by_declared_name() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("file.md"),
        "---\nname: legal_notice\ncategory: notice\n---\nBody",
    )
    .unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    assert_eq!(repo.get_by_name("legal_notice").unwrap().body, "Body");
    assert!(matches!(repo.get_by_name("file"), Err(TemplateRepoError::NotFound(_))));
}

#[test]
fn duplicate_names_are_rejected() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.md"), "---\nname: same\ncategory: notice\n---\n").unwrap();
    fs::write(tmp.path().join("b.md"), "---\nname: same\ncategory: notice\n---\n").unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, TemplateRepoError::Duplicate { .. }));
}

#[test]
fn duplicate_names_fail_lookup_too() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("notice.md"), "---\ncategory: notice\n---\nA").unwrap();
    fs::write(tmp.path().join("other.md"), "---\nname: notice\ncategory: notice\n---\nB")
        .unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let err = repo.get_by_name("notice").unwrap_err();
    assert!(matches!(err, TemplateRepoError::Duplicate { .. }));
}

#[test]
fn broken_file_reports_its_path() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("broken.md"), "no frontmatter").unwrap();

    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let err = repo.get_by_name("broken").unwrap_err();
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn transcript_prefill_then_missing_fields() {
    let tmp = tempdir().unwrap();
    write_builtin(tmp.path(), false).unwrap();
    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let affidavit = repo.get_by_name("affidavit").unwrap();

    // extractor keys only line up with the affidavit's `date`
    let extracted = extract("I am Asha Verma, date 12/05/2024");
    let mapping = merge(extracted, &vars(&[("affiant_name", "Asha Verma")]));

    let err = generate_document(&affidavit, &mapping).unwrap_err();
    assert_eq!(
        err,
        TemplateRenderError::MissingRequiredFields(vec![
            "Father's Name".into(),
            "Your Address".into(),
            "Statement of Facts".into(),
            "Purpose of Affidavit".into(),
            "Place".into(),
        ])
    );
}

#[test]
fn affidavit_renders_fully() {
    let tmp = tempdir().unwrap();
    write_builtin(tmp.path(), false).unwrap();
    let repo = TemplateRepository::new(tmp.path()).unwrap();
    let affidavit = repo.get_by_name("affidavit").unwrap();

    let mapping = vars(&[
        ("affiant_name", "Asha Verma"),
        ("father_name", "Ramesh Verma"),
        ("affiant_address", "12 MG Road Pune"),
        ("statement_of_facts", "I have lost my original passport."),
        ("purpose", "passport reissue"),
        ("date", "12/05/2024"),
        ("place", "Pune"),
    ]);

    let doc = generate_document(&affidavit, &mapping).unwrap();
    assert_eq!(doc.template_name, "affidavit");
    insta::assert_snapshot!(doc.content, @r#"
AFFIDAVIT

I, Asha Verma, son/daughter of Ramesh Verma, residing at 12 MG Road Pune, do hereby solemnly affirm and declare as under:

1. That the contents of this affidavit are true and correct to the best of my knowledge and belief.
2. That I have lost my original passport.
3. That this affidavit is made for passport reissue.

I solemnly affirm that this declaration is true and that no part of it is false.

Date: 12/05/2024
Place: Pune

Deponent Signature: _________________
Name: Asha Verma
Address: 12 MG Road Pune
"#);
}
