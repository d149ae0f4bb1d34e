use super::domain::InterviewRecord;

/// Predicate deciding whether a record belongs to a rule's category. Schemes
/// are immutable process-wide configuration, so predicates must be `Send +
/// Sync` and free of hidden state.
pub type RulePredicate = Box<dyn Fn(&InterviewRecord) -> bool + Send + Sync>;

pub struct ClassificationRule {
    category: String,
    predicate: RulePredicate,
}

impl ClassificationRule {
    pub fn new(
        category: impl Into<String>,
        predicate: impl Fn(&InterviewRecord) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            category: category.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// An ordered, immutable list of classification rules plus a trailing
/// catch-all category.
///
/// Rules are evaluated in declaration order and the first match wins, so
/// overlapping predicates must be listed most-specific-first. Combined with
/// the catch-all this makes classification exhaustive: every record yields
/// exactly one category label.
#[derive(Debug)]
pub struct ClassificationScheme {
    name: String,
    catch_all: String,
    rules: Vec<ClassificationRule>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("classification scheme '{name}' declares no rules")]
    EmptyScheme { name: String },
}

impl ClassificationScheme {
    /// Build a scheme, failing fast on a rule-less definition before any
    /// record is processed.
    pub fn new(
        name: impl Into<String>,
        catch_all: impl Into<String>,
        rules: Vec<ClassificationRule>,
    ) -> Result<Self, SchemeError> {
        let name = name.into();
        if rules.is_empty() {
            return Err(SchemeError::EmptyScheme { name });
        }

        Ok(Self {
            name,
            catch_all: catch_all.into(),
            rules,
        })
    }

    /// Constructor for the built-in schemes, whose rule lists are statically
    /// non-empty.
    pub(crate) fn from_parts(
        name: &'static str,
        catch_all: &'static str,
        rules: Vec<ClassificationRule>,
    ) -> Self {
        Self {
            name: name.to_string(),
            catch_all: catch_all.to_string(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catch_all(&self) -> &str {
        &self.catch_all
    }

    /// First matching rule wins; no match falls through to the catch-all.
    pub fn classify(&self, record: &InterviewRecord) -> &str {
        self.rules
            .iter()
            .find(|rule| (rule.predicate)(record))
            .map(ClassificationRule::category)
            .unwrap_or(&self.catch_all)
    }

    /// Declared category order plus the catch-all. This is the stable order
    /// consumers use for matrices and exports.
    pub fn categories(&self) -> Vec<&str> {
        self.rules
            .iter()
            .map(ClassificationRule::category)
            .chain(std::iter::once(self.catch_all.as_str()))
            .collect()
    }
}
