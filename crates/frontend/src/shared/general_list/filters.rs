//! Filter-value store of a list.

use crate::shared::error::FilterDeclarationError;
use contracts::shared::list_query::{
    is_reserved_query_key, FilterDeclaration, FilterKind, FilterValue,
};
use std::collections::{BTreeMap, HashSet};

/// Checks the invariants of a declaration list: unique keys that do not clash
/// with paging, search or date parameters, options present exactly on
/// `Options` filters.
pub fn validate_declarations(
    declarations: &[FilterDeclaration],
) -> Result<(), Vec<FilterDeclarationError>> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for decl in declarations {
        let key = &decl.query_param_key;
        if is_reserved_query_key(key) {
            errors.push(FilterDeclarationError::ReservedKey(key.clone()));
        } else if !seen.insert(key.as_str()) {
            errors.push(FilterDeclarationError::DuplicateKey(key.clone()));
        }
        match (decl.kind, decl.options.is_empty()) {
            (FilterKind::Options, true) => {
                errors.push(FilterDeclarationError::MissingOptions(key.clone()))
            }
            (FilterKind::Search | FilterKind::Checkbox, false) => {
                errors.push(FilterDeclarationError::UnexpectedOptions(key.clone()))
            }
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Current value of every declared filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStore {
    declarations: Vec<FilterDeclaration>,
    values: BTreeMap<String, FilterValue>,
}

impl FilterStore {
    pub fn new(declarations: &[FilterDeclaration]) -> Self {
        let mut store = Self::default();
        store.initialize(declarations);
        store
    }

    /// Replaces the whole map with the defaults of `declarations`.
    ///
    /// A duplicated key keeps its first declaration; reserved keys are skipped.
    pub fn initialize(&mut self, declarations: &[FilterDeclaration]) {
        if let Err(errors) = validate_declarations(declarations) {
            for error in errors {
                log::warn!("filter declarations: {}", error);
            }
        }

        self.declarations.clear();
        self.values.clear();
        for decl in declarations {
            if is_reserved_query_key(&decl.query_param_key)
                || self.values.contains_key(&decl.query_param_key)
            {
                continue;
            }
            self.values
                .insert(decl.query_param_key.clone(), decl.default_value());
            self.declarations.push(decl.clone());
        }
    }

    /// Overwrites one entry. The value shape is not checked against the
    /// declared kind.
    pub fn set(&mut self, key: &str, value: FilterValue) {
        if is_reserved_query_key(key) {
            log::warn!("filter '{}' clashes with a list parameter, ignored", key);
            return;
        }
        if self.kind_of(key).is_none() {
            log::warn!("filter '{}' is not declared on this list", key);
        }
        self.values.insert(key.to_string(), value);
    }

    /// Puts one entry back to its default.
    pub fn clear(&mut self, key: &str) {
        let default = self
            .kind_of(key)
            .map(FilterValue::default_for)
            .unwrap_or_else(|| FilterValue::Text(String::new()));
        self.values.insert(key.to_string(), default);
    }

    pub fn reset(&mut self) {
        for decl in &self.declarations {
            self.values
                .insert(decl.query_param_key.clone(), decl.default_value());
        }
        self.values
            .retain(|key, _| self.declarations.iter().any(|d| &d.query_param_key == key));
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(FilterValue::Text(text)) => text.clone(),
            Some(other) => other.to_query_value(),
            None => String::new(),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FilterValue::Flag(true)))
    }

    pub fn declarations(&self) -> &[FilterDeclaration] {
        &self.declarations
    }

    pub fn kind_of(&self, key: &str) -> Option<FilterKind> {
        self.declarations
            .iter()
            .find(|d| d.query_param_key == key)
            .map(|d| d.kind)
    }

    /// Whether the entry under `key` means "no filter".
    pub fn is_empty(&self, key: &str, value: &FilterValue) -> bool {
        match self.kind_of(key) {
            Some(kind) => value.is_empty_for(kind),
            None => value.is_empty_sentinel(),
        }
    }

    /// Entries that take part in the query.
    pub fn active(&self) -> impl Iterator<Item = (&String, &FilterValue)> + '_ {
        self.values
            .iter()
            .filter(move |(key, value)| !self.is_empty(key, value))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn label_of(&self, key: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.query_param_key == key)
            .map(|d| d.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations() -> Vec<FilterDeclaration> {
        vec![
            FilterDeclaration::options("status", "وضعیت", ["open", "closed"]),
            FilterDeclaration::checkbox("is_active", "فعال"),
            FilterDeclaration::search("role", "نقش"),
        ]
    }

    #[test]
    fn test_initialize_seeds_defaults() {
        let store = FilterStore::new(&declarations());
        assert_eq!(store.get("status"), Some(&FilterValue::Text(String::new())));
        assert_eq!(store.get("is_active"), Some(&FilterValue::Flag(false)));
        assert_eq!(store.get("role"), Some(&FilterValue::Text(String::new())));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_initialize_replaces_whole_map() {
        let mut store = FilterStore::new(&declarations());
        store.set("status", "open".into());

        store.initialize(&[FilterDeclaration::checkbox("has_coupon", "کوپن")]);
        assert_eq!(store.get("status"), None);
        assert_eq!(store.get("has_coupon"), Some(&FilterValue::Flag(false)));
        assert_eq!(store.declarations().len(), 1);
    }

    #[test]
    fn test_active_skips_empty_values() {
        let mut store = FilterStore::new(&declarations());
        store.set("status", "".into());
        store.set("is_active", false.into());
        store.set("role", "admin".into());

        let active: Vec<_> = store.active().collect();
        assert_eq!(active, vec![(&"role".to_string(), &FilterValue::from("admin"))]);
    }

    #[test]
    fn test_number_zero_is_active() {
        let mut store = FilterStore::new(&[FilterDeclaration::search("min_price", "حداقل قیمت")]);
        store.set("min_price", 0i64.into());
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn test_set_does_not_validate_shape() {
        let mut store = FilterStore::new(&declarations());
        store.set("status", true.into());
        assert_eq!(store.get("status"), Some(&FilterValue::Flag(true)));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut store = FilterStore::new(&declarations());
        store.set("status", "open".into());
        store.set("is_active", true.into());
        store.set("undeclared", "x".into());

        store.clear("is_active");
        assert!(!store.flag("is_active"));
        assert_eq!(store.text("status"), "open");

        store.reset();
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.get("undeclared"), None);
    }

    #[test]
    fn test_validate_declarations() {
        assert_eq!(validate_declarations(&declarations()), Ok(()));

        let broken = vec![
            FilterDeclaration::search("status", "وضعیت"),
            FilterDeclaration::options("status", "وضعیت", Vec::<String>::new()),
            FilterDeclaration {
                options: vec!["x".to_string()],
                ..FilterDeclaration::checkbox("flag", "پرچم")
            },
        ];
        assert_eq!(
            validate_declarations(&broken),
            Err(vec![
                FilterDeclarationError::DuplicateKey("status".to_string()),
                FilterDeclarationError::MissingOptions("status".to_string()),
                FilterDeclarationError::UnexpectedOptions("flag".to_string()),
            ])
        );
    }

    #[test]
    fn test_duplicate_key_keeps_first_declaration() {
        let store = FilterStore::new(&[
            FilterDeclaration::checkbox("status", "اول"),
            FilterDeclaration::search("status", "دوم"),
        ]);
        assert_eq!(store.kind_of("status"), Some(FilterKind::Checkbox));
        assert_eq!(store.label_of("status"), Some("اول"));
    }

    #[test]
    fn test_reserved_keys_are_rejected() {
        let clashing = vec![
            FilterDeclaration::search("page", "صفحه"),
            FilterDeclaration::checkbox("q", "جستجو"),
            FilterDeclaration::search("created_from_date", "از"),
        ];
        assert_eq!(
            validate_declarations(&clashing),
            Err(vec![
                FilterDeclarationError::ReservedKey("page".to_string()),
                FilterDeclarationError::ReservedKey("q".to_string()),
                FilterDeclarationError::ReservedKey("created_from_date".to_string()),
            ])
        );

        let mut store = FilterStore::new(&clashing);
        assert!(store.declarations().is_empty());
        store.set("page", "7".into());
        assert_eq!(store.get("page"), None);
    }
}
