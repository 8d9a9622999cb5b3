use angelscript_core::Diagnostic;
use rustc_hash::FxHashSet;

use super::metadata::PendingDeclaration;

/// A rewritten section waiting to be handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledSection {
    pub name: String,
    pub code: String,
}

/// Paths already processed in the current session, in load order.
#[derive(Debug, Clone, Default)]
pub struct IncludedFileSet {
    seen: FxHashSet<String>,
    order: Vec<String>,
}

impl IncludedFileSet {
    /// Returns `false` if `path` was already present.
    pub fn insert(&mut self, path: &str) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        self.seen.insert(path.to_string());
        self.order.push(path.to_string());
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.order.clear();
    }
}

/// Working state of one build: everything between starting a module and
/// handing it to the engine.
#[derive(Debug, Clone, Default)]
pub struct BuildSession {
    pub(crate) declarations: Vec<PendingDeclaration>,
    pub(crate) included: IncludedFileSet,
    /// Names of in-memory sections; kept apart from `included` so a section
    /// name never shadows a file path.
    pub(crate) memory_sections: FxHashSet<String>,
    pub(crate) sections: Vec<AssembledSection>,
    pub(crate) warnings: Vec<Diagnostic>,
}

impl BuildSession {
    pub(crate) fn stage(&mut self, name: &str, code: String) {
        self.sections.push(AssembledSection {
            name: name.to_string(),
            code,
        });
    }

    pub fn declarations(&self) -> &[PendingDeclaration] {
        &self.declarations
    }

    pub fn included_files(&self) -> &IncludedFileSet {
        &self.included
    }

    pub fn sections(&self) -> &[AssembledSection] {
        &self.sections
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn clear(&mut self) {
        self.declarations.clear();
        self.included.clear();
        self.memory_sections.clear();
        self.sections.clear();
        self.warnings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn included_set_dedups_by_literal_path() {
        let mut set = IncludedFileSet::default();

        assert!(set.insert("a.as"));
        assert!(!set.insert("a.as"));
        assert!(set.insert("./a.as"));
        assert!(set.contains("a.as"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a.as", "./a.as"]);
    }

    #[test]
    fn clear_empties_session() {
        let mut session = BuildSession::default();
        session.included.insert("main.as");
        session.memory_sections.insert("inline".to_string());
        session.stage("main.as", "int x;".to_string());
        session.clear();

        assert!(session.included_files().is_empty());
        assert!(session.sections().is_empty());
        assert!(session.declarations().is_empty());
        assert!(session.memory_sections.is_empty());
    }
}
