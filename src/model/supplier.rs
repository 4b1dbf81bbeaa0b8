//! Supplier registry types and display helpers for Brazilian document, phone and postal
//! code formats.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    record_list::{Messages, Record},
    validation::{require, ValidationError},
};

text_enum! {
    PersonType, "person_type" {
        Company => ("company", "Pessoa Jurídica (CNPJ)"),
        Individual => ("individual", "Pessoa Física (CPF)"),
    }
}

text_enum! {
    AccountType, "account_type" {
        Checking => ("checking", "Conta Corrente"),
        Savings => ("savings", "Conta Poupança"),
    }
}

pub const SUPPLIER_MESSAGES: Messages = Messages {
    created: "Fornecedor cadastrado com sucesso!",
    updated: "Fornecedor atualizado com sucesso!",
    deleted: "Fornecedor removido com sucesso!",
    fetch_failed: "Erro ao carregar fornecedores",
    create_failed: "Erro ao cadastrar fornecedor",
    update_failed: "Erro ao atualizar fornecedor",
    delete_failed: "Erro ao remover fornecedor",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SupplierDto {
    pub id: i32,
    pub name: String,
    pub trade_name: Option<String>,
    pub person_type: Option<PersonType>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub landline: Option<String>,
    pub mobile: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub bank: Option<String>,
    pub bank_branch: Option<String>,
    pub bank_account: Option<String>,
    pub account_type: Option<AccountType>,
    pub category: String,
    pub services: Vec<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for SupplierDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SupplierInput {
    pub name: String,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(default)]
    pub person_type: Option<PersonType>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub landline: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub bank_branch: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    pub category: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for SupplierInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            trade_name: None,
            person_type: None,
            tax_id: None,
            email: None,
            landline: None,
            mobile: None,
            postal_code: None,
            street: None,
            number: None,
            complement: None,
            district: None,
            city: None,
            state: None,
            bank: None,
            bank_branch: None,
            bank_account: None,
            account_type: None,
            category: String::new(),
            services: Vec::new(),
            notes: None,
            is_active: true,
        }
    }
}

impl SupplierInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;

        Ok(())
    }
}

impl From<&SupplierDto> for SupplierInput {
    fn from(supplier: &SupplierDto) -> Self {
        Self {
            name: supplier.name.clone(),
            trade_name: supplier.trade_name.clone(),
            person_type: supplier.person_type,
            tax_id: supplier.tax_id.clone(),
            email: supplier.email.clone(),
            landline: supplier.landline.clone(),
            mobile: supplier.mobile.clone(),
            postal_code: supplier.postal_code.clone(),
            street: supplier.street.clone(),
            number: supplier.number.clone(),
            complement: supplier.complement.clone(),
            district: supplier.district.clone(),
            city: supplier.city.clone(),
            state: supplier.state.clone(),
            bank: supplier.bank.clone(),
            bank_branch: supplier.bank_branch.clone(),
            bank_account: supplier.bank_account.clone(),
            account_type: supplier.account_type,
            category: supplier.category.clone(),
            services: supplier.services.clone(),
            notes: supplier.notes.clone(),
            is_active: supplier.is_active,
        }
    }
}

/// Splits comma-separated services, trimming entries and dropping empty ones
pub fn split_services(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Storage form of a service list
pub fn join_services(services: &[String]) -> String {
    services
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Applies `groups` of digit lengths to `digits`, placing `separators[i]` before group `i + 1`
fn mask(digits: &str, groups: &[usize], separators: &[&str]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.iter().map(|s| s.len()).sum::<usize>());
    let mut start = 0;

    for (i, len) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(separators[i - 1]);
        }
        out.push_str(&digits[start..start + len]);
        start += len;
    }

    out
}

/// Formats a CPF (11 digits) or CNPJ (14 digits); other lengths come back as bare digits
pub fn format_tax_id(value: &str) -> String {
    let d = digits(value);

    match d.len() {
        11 => mask(&d, &[3, 3, 3, 2], &[".", ".", "-"]),
        14 => mask(&d, &[2, 3, 3, 4, 2], &[".", ".", "/", "-"]),
        _ => d,
    }
}

/// Formats a mobile (11 digits) or landline (10 digits) number with its area code
pub fn format_phone(value: &str) -> String {
    let d = digits(value);

    match d.len() {
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        _ => d,
    }
}

/// Formats an 8-digit CEP
pub fn format_postal_code(value: &str) -> String {
    let d = digits(value);

    match d.len() {
        8 => mask(&d, &[5, 3], &["-"]),
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_services() {
        assert_eq!(
            split_services(" Limpeza, ,Jardinagem ,  Pintura,"),
            vec!["Limpeza", "Jardinagem", "Pintura"]
        );
        assert!(split_services("  ").is_empty());
    }

    #[test]
    fn joins_services_for_storage() {
        let services = vec!["Limpeza".to_string(), " ".to_string(), "Pintura ".to_string()];
        assert_eq!(join_services(&services), "Limpeza, Pintura");
        assert_eq!(split_services(&join_services(&services)), vec!["Limpeza", "Pintura"]);
    }

    #[test]
    fn formats_cpf_and_cnpj() {
        assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
        assert_eq!(format_tax_id("12.345.678/0001-95"), "12.345.678/0001-95");
        assert_eq!(format_tax_id("12345678000195"), "12.345.678/0001-95");
        assert_eq!(format_tax_id("12-34"), "1234");
    }

    #[test]
    fn formats_phones() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1132654321"), "(11) 3265-4321");
        assert_eq!(format_phone("+55"), "55");
    }

    #[test]
    fn formats_postal_code() {
        assert_eq!(format_postal_code("01310100"), "01310-100");
        assert_eq!(format_postal_code("0131"), "0131");
    }

    #[test]
    fn requires_name_and_category() {
        let supplier = SupplierInput {
            name: "Limpa Tudo".to_string(),
            ..Default::default()
        };
        assert_eq!(supplier.validate(), Err(ValidationError::Required("category")));
        assert!(supplier.is_active);
    }
}
