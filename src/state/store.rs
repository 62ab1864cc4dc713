//! State Store - the live configuration record.
//!
//! The configuration lives in a spark-signals [`Signal`], so every derived
//! that reads it (preview, code, frame) re-derives after a mutation. Values
//! are never rejected: an out-of-range number is stored as given and logged.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::model::{ConfigPatch, Configuration, Field, FieldValue};
//! use gridview_builder::state::store::StateStore;
//!
//! let store = StateStore::new(Configuration::default());
//! store.set(&ConfigPatch::new().columns(5));
//! store.set_one(Field::Padding, FieldValue::Number(8.0));
//! assert_eq!(store.get().columns, 5);
//! assert_eq!(store.get().padding, 8.0);
//! ```

use spark_signals::{signal, Signal};

use crate::model::{ConfigPatch, Configuration, Field, FieldValue};

/// Owner of one widget's configuration.
#[derive(Clone)]
pub struct StateStore {
    config: Signal<Configuration>,
}

impl StateStore {
    pub fn new(initial: Configuration) -> Self {
        warn_out_of_range(&initial, &initial.out_of_range_fields());
        Self {
            config: signal(initial),
        }
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> Configuration {
        self.config.get()
    }

    /// Merge the fields present in `patch`. Returns the fields that were set.
    pub fn set(&self, patch: &ConfigPatch) -> Vec<Field> {
        if patch.is_empty() {
            return Vec::new();
        }
        let mut next = self.config.get();
        let set = next.apply(patch);

        let out_of_range: Vec<Field> = next
            .out_of_range_fields()
            .into_iter()
            .filter(|field| set.contains(field))
            .collect();
        warn_out_of_range(&next, &out_of_range);

        tracing::debug!(fields = ?set, "configuration updated");
        self.config.set(next);
        set
    }

    /// Single-field update from a control.
    ///
    /// A value of the wrong kind for the field is ignored and `false` returned.
    pub fn set_one(&self, field: Field, value: FieldValue) -> bool {
        match ConfigPatch::single(field, value) {
            Some(patch) => {
                self.set(&patch);
                true
            }
            None => {
                tracing::warn!(%field, ?value, "value kind does not match field, ignored");
                false
            }
        }
    }

    /// The underlying signal, for building deriveds.
    pub fn signal(&self) -> Signal<Configuration> {
        self.config.clone()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

fn warn_out_of_range(config: &Configuration, fields: &[Field]) {
    for field in fields {
        tracing::warn!(
            %field,
            value = %config.value(*field),
            "value outside control range, accepted as-is"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeStyle, ContentTemplate};

    fn setup() -> StateStore {
        StateStore::default()
    }

    #[test]
    fn test_get_returns_snapshot() {
        let store = setup();
        let mut snapshot = store.get();
        snapshot.columns = 6;
        assert_eq!(store.get().columns, 3);
    }

    #[test]
    fn test_set_merges_fields() {
        let store = setup();
        let set = store.set(
            &ConfigPatch::new()
                .code_style(CodeStyle::IndexBuilder)
                .content_template(ContentTemplate::ProductCard),
        );
        assert_eq!(set, vec![Field::CodeStyle, Field::ContentTemplate]);
        let c = store.get();
        assert_eq!(c.code_style, CodeStyle::IndexBuilder);
        assert_eq!(c.content_template, ContentTemplate::ProductCard);
        assert_eq!(c.item_count, 12);
    }

    #[test]
    fn test_out_of_range_accepted() {
        let store = setup();
        store.set(&ConfigPatch::new().columns(12).aspect_ratio(5.0));
        assert_eq!(store.get().columns, 12);
        assert_eq!(store.get().aspect_ratio, 5.0);
    }

    #[test]
    fn test_set_one_kind_mismatch_ignored() {
        let store = setup();
        assert!(!store.set_one(Field::Padding, FieldValue::Template(ContentTemplate::IconCard)));
        assert_eq!(store.get(), Configuration::default());
        assert!(store.set_one(Field::ContentTemplate, FieldValue::Template(ContentTemplate::IconCard)));
        assert_eq!(store.get().content_template, ContentTemplate::IconCard);
    }

    #[test]
    fn test_clones_share_state() {
        let store = setup();
        let other = store.clone();
        other.set(&ConfigPatch::new().item_count(4));
        assert_eq!(store.get().item_count, 4);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let store = setup();
        assert!(store.set(&ConfigPatch::new()).is_empty());
        assert_eq!(store.get(), Configuration::default());
    }
}
