//! `classify` command: report how changed files would reach the page.

use code_sync::reload::{ChangeEvent, attribute_for, tag_for};
use code_sync::{SyncConfig, log};

/// Handling of one changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Patch `<tag attribute=...>` references in place
    Inject {
        tag: &'static str,
        attribute: &'static str,
    },
    FullReload,
}

pub fn classify(path: &str, config: &SyncConfig) -> Classification {
    if !config.inject_changes {
        return Classification::FullReload;
    }
    let event = ChangeEvent::from_path(path);
    tag_for(&event.file_extension)
        .and_then(|tag| attribute_for(tag).map(|attribute| (tag, attribute)))
        .map_or(Classification::FullReload, |(tag, attribute)| {
            Classification::Inject { tag, attribute }
        })
}

pub fn run_classify(paths: &[String], config: &SyncConfig) {
    for path in paths {
        match classify(path, config) {
            Classification::Inject { tag, attribute } => {
                log!("inject"; "{}: <{} {}>", path, tag, attribute)
            }
            Classification::FullReload => log!("reload"; "{}: full page reload", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let config = SyncConfig::default();
        assert_eq!(
            classify("assets/site.css", &config),
            Classification::Inject {
                tag: "link",
                attribute: "href"
            }
        );
        assert_eq!(
            classify("photo.JPG", &config),
            Classification::Inject {
                tag: "img",
                attribute: "src"
            }
        );
        assert_eq!(classify("index.html", &config), Classification::FullReload);
        assert_eq!(classify("Makefile", &config), Classification::FullReload);
    }

    #[test]
    fn test_classify_without_injection() {
        let config = SyncConfig {
            inject_changes: false,
            ..SyncConfig::default()
        };
        assert_eq!(classify("site.css", &config), Classification::FullReload);
    }
}
