//! Metadata records and the store that keeps them after a build.

use angelscript_core::{EntityResolver, FunctionId, TypeId, VarIndex};
use rustc_hash::FxHashMap;

/// What kind of declaration an annotation was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Type,
    Function,
    Variable,
}

/// An annotation found while scanning, waiting to be resolved after the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeclaration {
    /// The annotation payload, verbatim.
    pub metadata: String,
    /// Declaration text handed to the engine's lookup functions.
    pub signature: String,
    pub kind: DeclarationKind,
}

/// Counters describing the last metadata binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataStats {
    /// Declarations recorded while scanning.
    pub declarations: usize,
    pub types: usize,
    pub functions: usize,
    pub variables: usize,
    /// Declarations whose signature didn't resolve to a compiled entity.
    pub unresolved: usize,
}

/// Metadata keyed by compiled entity id.
///
/// Populated by a successful build. Lookups for ids that never had metadata
/// return an empty string from the `metadata_for_*` methods and `None` from
/// the `Option` variants.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    types: FxHashMap<TypeId, String>,
    functions: FxHashMap<FunctionId, String>,
    variables: FxHashMap<VarIndex, String>,
    declarations: usize,
    unresolved: usize,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each declaration against the engine and record the hits.
    ///
    /// Misses are counted but otherwise dropped. A later declaration resolving
    /// to the same id overwrites the earlier one.
    pub fn bind<R: EntityResolver + ?Sized>(
        &mut self,
        resolver: &R,
        module: &str,
        declarations: &[PendingDeclaration],
    ) {
        self.declarations += declarations.len();

        for decl in declarations {
            let signature = decl.signature.as_str();
            let resolved = match decl.kind {
                DeclarationKind::Type => resolver
                    .type_id_by_decl(module, signature)
                    .map(|id| self.types.insert(id, decl.metadata.clone())),
                DeclarationKind::Function => resolver
                    .function_id_by_decl(module, signature)
                    .map(|id| self.functions.insert(id, decl.metadata.clone())),
                DeclarationKind::Variable => resolver
                    .global_var_index_by_decl(module, signature)
                    .map(|index| self.variables.insert(index, decl.metadata.clone())),
            };

            if resolved.is_none() {
                self.unresolved += 1;
                tracing::debug!(
                    kind = ?decl.kind,
                    signature,
                    "declaration did not resolve to a compiled entity"
                );
            }
        }
    }

    pub fn metadata_for_type(&self, type_id: TypeId) -> &str {
        self.type_metadata(type_id).unwrap_or_default()
    }

    pub fn metadata_for_func(&self, func_id: FunctionId) -> &str {
        self.func_metadata(func_id).unwrap_or_default()
    }

    pub fn metadata_for_var(&self, var_index: VarIndex) -> &str {
        self.var_metadata(var_index).unwrap_or_default()
    }

    pub fn type_metadata(&self, type_id: TypeId) -> Option<&str> {
        self.types.get(&type_id).map(String::as_str)
    }

    pub fn func_metadata(&self, func_id: FunctionId) -> Option<&str> {
        self.functions.get(&func_id).map(String::as_str)
    }

    pub fn var_metadata(&self, var_index: VarIndex) -> Option<&str> {
        self.variables.get(&var_index).map(String::as_str)
    }

    /// Number of entities carrying metadata.
    pub fn len(&self) -> usize {
        self.types.len() + self.functions.len() + self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.functions.clear();
        self.variables.clear();
        self.declarations = 0;
        self.unresolved = 0;
    }

    pub fn stats(&self) -> MetadataStats {
        MetadataStats {
            declarations: self.declarations,
            types: self.types.len(),
            functions: self.functions.len(),
            variables: self.variables.len(),
            unresolved: self.unresolved,
        }
    }
}
