//! Compile-time embedded template storage, exposed to the materializer only
//! through the `TemplateSource` capability.

use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::template::{GenerateError, TemplateEntry, TemplateSource};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateAssets;

/// Template sets shipped inside the binary, one directory per set under
/// `templates/`.
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn set_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = TemplateAssets::iter()
            .filter_map(|key| {
                key.split_once('/')
                    .map(|(set_id, _)| set_id.to_string())
            })
            .collect();
        names.into_iter().collect()
    }

    fn list_files(&self, set_id: &str) -> Result<Vec<TemplateEntry>, GenerateError> {
        let prefix = format!("{set_id}/");
        let mut entries: Vec<TemplateEntry> = TemplateAssets::iter()
            .filter_map(|key| {
                let relative = key.strip_prefix(&prefix)?.to_string();
                let file = TemplateAssets::get(key.as_ref())?;
                Some(TemplateEntry::file(
                    PathBuf::from(relative),
                    file.data.into_owned(),
                ))
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_set_is_embedded() {
        assert!(EmbeddedTemplates
            .set_names()
            .contains(&"web-api-stdlib".to_string()));
    }

    #[test]
    fn listing_is_in_lexical_order_and_marks_templates() {
        let entries = EmbeddedTemplates.list_files("web-api-stdlib").unwrap();
        assert!(!entries.is_empty());

        let mut sorted = entries.clone();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(entries, sorted);

        let go_mod = entries
            .iter()
            .find(|e| e.path == PathBuf::from("go.mod.tmpl"))
            .expect("go.mod.tmpl is part of the set");
        assert!(go_mod.is_template);

        let server = entries
            .iter()
            .find(|e| e.path == PathBuf::from("cmd/api/main.go"))
            .expect("cmd/api/main.go is part of the set");
        assert!(!server.is_template);
    }

    #[test]
    fn unknown_set_lists_nothing() {
        assert!(EmbeddedTemplates.list_files("grpc-stdlib").unwrap().is_empty());
    }
}
