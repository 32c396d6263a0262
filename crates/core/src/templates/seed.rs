//! Built-in legal templates and writing them into a template store.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::types::{Category, Template, TemplateFrontmatter, VariableSpec, VariableType};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("template file already exists: {0} (use --force to overwrite)")]
    Exists(PathBuf),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize template '{0}': {1}")]
    Serialize(String, #[source] serde_yaml::Error),
}

const RENTAL_AGREEMENT: &str = "RENTAL AGREEMENT

This Rental Agreement is made on {{date}} between:

LANDLORD:
Name: {{landlord_name}}
Address: {{landlord_address}}
Phone: {{landlord_phone}}

TENANT:
Name: {{tenant_name}}
Address: {{tenant_address}}
Phone: {{tenant_phone}}

PROPERTY:
Address: {{property_address}}
Type: {{property_type}}
Rent: ₹{{monthly_rent}} per month
Security Deposit: ₹{{security_deposit}}

TERMS:
1. The tenant shall pay rent monthly on the {{rent_due_day}} of each month.
2. The security deposit shall be refundable upon termination of this agreement.
3. This agreement is valid from {{start_date}} to {{end_date}}.

Signed by both parties on {{signature_date}}.

Landlord Signature: _________________
Tenant Signature: ___________________
";

const AFFIDAVIT: &str = "AFFIDAVIT

I, {{affiant_name}}, son/daughter of {{father_name}}, residing at {{affiant_address}}, do hereby solemnly affirm and declare as under:

1. That the contents of this affidavit are true and correct to the best of my knowledge and belief.
2. That {{statement_of_facts}}
3. That this affidavit is made for {{purpose}}.

I solemnly affirm that this declaration is true and that no part of it is false.

Date: {{date}}
Place: {{place}}

Deponent Signature: _________________
Name: {{affiant_name}}
Address: {{affiant_address}}
";

fn required(name: &str, label: &str, var_type: VariableType) -> VariableSpec {
    VariableSpec::new(name, label, var_type, true)
}

pub fn rental_agreement() -> Template {
    use VariableType::{Address, Date, Number, Text};

    Template {
        name: "rental_agreement".into(),
        category: Category::Agreement,
        description: "Standard residential rental agreement".into(),
        body: RENTAL_AGREEMENT.into(),
        variables: vec![
            required("date", "Agreement Date", Date),
            required("landlord_name", "Landlord Name", Text),
            required("landlord_address", "Landlord Address", Address),
            required("landlord_phone", "Landlord Phone", Text),
            required("tenant_name", "Tenant Name", Text),
            required("tenant_address", "Tenant Address", Address),
            required("tenant_phone", "Tenant Phone", Text),
            required("property_address", "Property Address", Address),
            required("property_type", "Property Type", Text),
            required("monthly_rent", "Monthly Rent", Number),
            required("security_deposit", "Security Deposit", Number),
            required("rent_due_day", "Rent Due Day", Text),
            required("start_date", "Start Date", Date),
            required("end_date", "End Date", Date),
            required("signature_date", "Signature Date", Date),
        ],
        is_active: true,
    }
}

pub fn affidavit() -> Template {
    use VariableType::{Address, Date, Text};

    Template {
        name: "affidavit".into(),
        category: Category::Affidavit,
        description: "General purpose affidavit".into(),
        body: AFFIDAVIT.into(),
        variables: vec![
            required("affiant_name", "Your Full Name", Text),
            required("father_name", "Father's Name", Text),
            required("affiant_address", "Your Address", Address),
            required("statement_of_facts", "Statement of Facts", Text),
            required("purpose", "Purpose of Affidavit", Text),
            required("date", "Date", Date),
            required("place", "Place", Text),
        ],
        is_active: true,
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![rental_agreement(), affidavit()]
}

/// Serialize a template to the on-disk format: YAML frontmatter, then body.
pub fn to_file_contents(template: &Template) -> Result<String, SeedError> {
    let fm = TemplateFrontmatter {
        name: Some(template.name.clone()),
        category: template.category,
        description: template.description.clone(),
        is_active: template.is_active,
        variables: template.variables.clone(),
    };
    let yaml = serde_yaml::to_string(&fm)
        .map_err(|e| SeedError::Serialize(template.name.clone(), e))?;
    Ok(format!("---\n{yaml}---\n{}", template.body))
}

/// Write the built-in templates into `dir` as `<name>.md` files.
///
/// Existing files are left alone and reported as an error unless `force`.
pub fn write_builtin(dir: &Path, force: bool) -> Result<Vec<PathBuf>, SeedError> {
    fs::create_dir_all(dir)
        .map_err(|e| SeedError::Io { path: dir.to_path_buf(), source: e })?;

    let templates = builtin_templates();
    if !force {
        for t in &templates {
            let path = dir.join(format!("{}.md", t.name));
            if path.exists() {
                return Err(SeedError::Exists(path));
            }
        }
    }

    let mut written = Vec::with_capacity(templates.len());
    for t in &templates {
        let path = dir.join(format!("{}.md", t.name));
        let contents = to_file_contents(t)?;
        fs::write(&path, contents)
            .map_err(|e| SeedError::Io { path: path.clone(), source: e })?;
        info!(template = %t.name, path = %path.display(), "seeded template");
        written.push(path);
    }

    Ok(written)
}
