//! Pattern recipes for `regexpr-core`.
//!
//! A recipe names a pattern and lists the builder calls that produce it, so
//! patterns can live in YAML next to the code that uses them. This module
//! handles deserialization, merging of default and user recipe sets, and
//! validation of a whole set before anything is built.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::builder::{Alternative, RegExprBuilder};
use crate::errors::RegExprError;
use crate::expr::RegExpr;
use crate::flags::Flag;

/// Maximum allowed length for a built expression.
pub const MAX_PATTERN_LENGTH: usize = 4096;

/// Engine limits forwarded to `fancy_regex::RegexBuilder`. Unset values keep
/// the engine defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on backtracking steps before a match attempt fails.
    pub backtrack_limit: Option<usize>,
    /// Size limit for sub-expressions delegated to the `regex` crate.
    pub delegate_size_limit: Option<usize>,
}

/// The argument of a composition step: literal text, an inline step list, or
/// another recipe by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Literal(String),
    Inline { steps: Vec<Step> },
    Reference { pattern: String },
}

/// One builder call. Unit variants are written as a bare name
/// (`- digits`), the others as a single-key map (`- exactly: 4`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AddFlag(Flag),
    IgnoreCase,
    MultiLine,
    GlobalMatch,

    StartOfInput,
    StartOfLine,
    EndOfInput,
    EndOfLine,

    Exactly(usize),
    Min(usize),
    Max(usize),
    Reluctantly,

    Of(String),
    OfAny,
    OfGroup(usize),
    From(Vec<String>),
    NotFrom(Vec<String>),
    Like(Operand),

    AsGroup,
    AsNamedGroup(String),

    Ahead(Operand),
    NotAhead(Operand),

    EitherFind(Operand),
    OrFind(Operand),
    AnyOf(Vec<Operand>),
    Neither(Operand),
    Nor(Operand),
    Append(Operand),
    Optional(Operand),

    Then(String),
    Find(String),
    #[serde(rename = "some")]
    SomeOf(Vec<String>),
    MaybeSome(Vec<String>),
    Maybe(String),
    Anything,
    AnythingBut(String),
    Something,
    Any,
    LineBreak,
    LineBreaks,
    Whitespace,
    NotWhitespace,
    Tab,
    Tabs,
    Digit,
    NotDigit,
    Digits,
    NotDigits,
    Letter,
    NotLetter,
    Letters,
    NotLetters,
    LowerCaseLetter,
    LowerCaseLetters,
    UpperCaseLetter,
    UpperCaseLetters,
}

/// A named pattern and the steps that build it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRecipe {
    /// Unique identifier (e.g., "image_file").
    pub name: String,
    pub description: Option<String>,
    /// Flags applied to the built expression. Flags of a referenced recipe are
    /// not carried into the recipe that references it.
    pub flags: Vec<Flag>,
    pub steps: Vec<Step>,
}

/// Top-level structure of a recipe file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeConfig {
    #[serde(default)]
    pub patterns: Vec<PatternRecipe>,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// A resolved operand that owns any builder it had to create.
enum ResolvedOperand<'a> {
    Literal(&'a str),
    Pattern(RegExprBuilder),
}

impl ResolvedOperand<'_> {
    fn as_alternative(&self) -> Alternative<'_> {
        match self {
            ResolvedOperand::Literal(text) => Alternative::Literal(text),
            ResolvedOperand::Pattern(builder) => Alternative::Pattern(builder),
        }
    }
}

impl RecipeConfig {
    /// Loads and validates recipes from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern recipes from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
        let config: RecipeConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;

        validate_recipes(&config.patterns)?;
        info!("Loaded {} recipes from file {}.", config.patterns.len(), path.display());

        Ok(config)
    }

    /// Loads a recipe file meant to be merged over another set.
    ///
    /// Names and step lists are checked here. References may point at
    /// recipes of the set it is merged into, so they are left to
    /// [`validate_recipes`] on the merged result.
    pub fn load_overrides_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading recipe overrides from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
        let config: RecipeConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;

        fail_on(entry_errors(&config.patterns))?;
        info!("Loaded {} recipe overrides from file {}.", config.patterns.len(), path.display());

        Ok(config)
    }

    /// Parses and validates recipes from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: RecipeConfig = serde_yml::from_str(text).context("Failed to parse recipe text")?;
        validate_recipes(&config.patterns)?;
        debug!("Parsed {} recipes from text.", config.patterns.len());
        Ok(config)
    }

    /// Loads the recipes embedded in the library.
    pub fn load_default_recipes() -> Result<Self> {
        debug!("Loading default recipes from embedded string...");
        let default_yaml = include_str!("../config/default_recipes.yaml");
        let config: RecipeConfig = serde_yml::from_str(default_yaml).context("Failed to parse default recipes")?;

        debug!("Loaded {} default recipes.", config.patterns.len());
        Ok(config)
    }

    pub fn get(&self, name: &str) -> Option<&PatternRecipe> {
        self.patterns.iter().find(|recipe| recipe.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|recipe| recipe.name.as_str())
    }

    /// Builds the named recipe, resolving references to other recipes.
    pub fn build(&self, name: &str) -> Result<RegExpr, RegExprError> {
        let mut visiting = Vec::new();
        let mut builder = self.builder_for(name, &mut visiting)?;
        let expr = builder.build().with_engine_config(self.engine);

        let length = expr.expression().len();
        if length > MAX_PATTERN_LENGTH {
            return Err(RegExprError::PatternLengthExceeded(name.to_string(), length, MAX_PATTERN_LENGTH));
        }

        debug!("Built recipe '{}' as {}.", name, expr);
        Ok(expr)
    }

    /// Builds every recipe, in file order.
    pub fn build_all(&self) -> Result<Vec<(String, RegExpr)>, RegExprError> {
        self.patterns
            .iter()
            .map(|recipe| Ok((recipe.name.clone(), self.build(&recipe.name)?)))
            .collect()
    }

    fn builder_for(&self, name: &str, visiting: &mut Vec<String>) -> Result<RegExprBuilder, RegExprError> {
        let recipe = self
            .get(name)
            .ok_or_else(|| RegExprError::UnknownPattern(name.to_string()))?;
        if visiting.iter().any(|seen| seen == name) {
            return Err(RegExprError::RecipeCycle(name.to_string()));
        }

        visiting.push(name.to_string());
        let mut builder = self.builder_from_steps(&recipe.steps, visiting)?;
        for flag in &recipe.flags {
            builder.add_flag(*flag);
        }
        visiting.pop();

        Ok(builder)
    }

    fn builder_from_steps(&self, steps: &[Step], visiting: &mut Vec<String>) -> Result<RegExprBuilder, RegExprError> {
        let mut builder = RegExprBuilder::new();
        for step in steps {
            self.apply(&mut builder, step, visiting)?;
        }
        Ok(builder)
    }

    fn resolve<'a>(&self, operand: &'a Operand, visiting: &mut Vec<String>) -> Result<ResolvedOperand<'a>, RegExprError> {
        Ok(match operand {
            Operand::Literal(text) => ResolvedOperand::Literal(text),
            Operand::Inline { steps } => ResolvedOperand::Pattern(self.builder_from_steps(steps, visiting)?),
            Operand::Reference { pattern } => ResolvedOperand::Pattern(self.builder_for(pattern, visiting)?),
        })
    }

    fn apply(&self, builder: &mut RegExprBuilder, step: &Step, visiting: &mut Vec<String>) -> Result<(), RegExprError> {
        match step {
            Step::AddFlag(flag) => builder.add_flag(*flag),
            Step::IgnoreCase => builder.ignore_case(),
            Step::MultiLine => builder.multi_line(),
            Step::GlobalMatch => builder.global_match(),

            Step::StartOfInput => builder.start_of_input(),
            Step::StartOfLine => builder.start_of_line(),
            Step::EndOfInput => builder.end_of_input(),
            Step::EndOfLine => builder.end_of_line(),

            Step::Exactly(n) => builder.exactly(*n),
            Step::Min(n) => builder.min(*n),
            Step::Max(n) => builder.max(*n),
            Step::Reluctantly => builder.reluctantly(),

            Step::Of(text) => builder.of(text),
            Step::OfAny => builder.of_any(),
            Step::OfGroup(group) => builder.of_group(*group),
            Step::From(chars) => builder.from(chars),
            Step::NotFrom(chars) => builder.not_from(chars),
            Step::Like(operand) => builder.like(self.resolve(operand, visiting)?.as_alternative()),

            Step::AsGroup => builder.as_group(),
            Step::AsNamedGroup(name) => builder.as_named_group(name),

            Step::Ahead(operand) => builder.ahead(self.resolve(operand, visiting)?.as_alternative()),
            Step::NotAhead(operand) => builder.not_ahead(self.resolve(operand, visiting)?.as_alternative()),

            Step::EitherFind(operand) => builder.either_find(self.resolve(operand, visiting)?.as_alternative()),
            Step::OrFind(operand) => builder.or_find(self.resolve(operand, visiting)?.as_alternative()),
            Step::AnyOf(operands) => {
                let resolved = operands
                    .iter()
                    .map(|operand| self.resolve(operand, visiting))
                    .collect::<Result<Vec<_>, _>>()?;
                builder.any_of(resolved.iter().map(|operand| operand.as_alternative()))
            }
            Step::Neither(operand) => builder.neither(self.resolve(operand, visiting)?.as_alternative()),
            Step::Nor(operand) => builder.nor(self.resolve(operand, visiting)?.as_alternative()),
            Step::Append(operand) => builder.append(self.resolve(operand, visiting)?.as_alternative()),
            Step::Optional(operand) => builder.optional(self.resolve(operand, visiting)?.as_alternative()),

            Step::Then(text) => builder.then(text),
            Step::Find(text) => builder.find(text),
            Step::SomeOf(chars) => builder.some(chars),
            Step::MaybeSome(chars) => builder.maybe_some(chars),
            Step::Maybe(text) => builder.maybe(text),
            Step::Anything => builder.anything(),
            Step::AnythingBut(text) => builder.anything_but(text),
            Step::Something => builder.something(),
            Step::Any => builder.any(),
            Step::LineBreak => builder.line_break(),
            Step::LineBreaks => builder.line_breaks(),
            Step::Whitespace => builder.whitespace(),
            Step::NotWhitespace => builder.not_whitespace(),
            Step::Tab => builder.tab(),
            Step::Tabs => builder.tabs(),
            Step::Digit => builder.digit(),
            Step::NotDigit => builder.not_digit(),
            Step::Digits => builder.digits(),
            Step::NotDigits => builder.not_digits(),
            Step::Letter => builder.letter(),
            Step::NotLetter => builder.not_letter(),
            Step::Letters => builder.letters(),
            Step::NotLetters => builder.not_letters(),
            Step::LowerCaseLetter => builder.lower_case_letter(),
            Step::LowerCaseLetters => builder.lower_case_letters(),
            Step::UpperCaseLetter => builder.upper_case_letter(),
            Step::UpperCaseLetters => builder.upper_case_letters(),
        };
        Ok(())
    }
}

/// Merges user recipes and engine settings into the defaults. A user recipe
/// replaces the default of the same name in place; new ones are appended.
pub fn merge_recipes(default_config: RecipeConfig, user_config: Option<RecipeConfig>) -> RecipeConfig {
    debug!("merge_recipes called. Initial default recipe count: {}", default_config.patterns.len());

    let mut final_patterns = default_config.patterns;
    let mut final_engine = default_config.engine;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user recipes.", user_cfg.patterns.len());
        for user_recipe in user_cfg.patterns {
            match final_patterns.iter_mut().find(|recipe| recipe.name == user_recipe.name) {
                Some(existing) => *existing = user_recipe,
                None => final_patterns.push(user_recipe),
            }
        }

        if let Some(limit) = user_cfg.engine.backtrack_limit {
            debug!("Overriding backtrack limit with user value: {}", limit);
            final_engine.backtrack_limit = Some(limit);
        }

        if let Some(limit) = user_cfg.engine.delegate_size_limit {
            debug!("Overriding delegate size limit with user value: {}", limit);
            final_engine.delegate_size_limit = Some(limit);
        }
    }

    debug!("Final total recipes after merge: {}", final_patterns.len());

    RecipeConfig {
        patterns: final_patterns,
        engine: final_engine,
    }
}

/// Validates a recipe set: names, step lists, references and reference cycles.
/// Every problem found is reported in one error.
pub fn validate_recipes(recipes: &[PatternRecipe]) -> Result<()> {
    let recipe_names: HashSet<&str> = recipes.iter().map(|recipe| recipe.name.as_str()).collect();
    let mut errors = entry_errors(recipes);

    for recipe in recipes {
        for reference in references(&recipe.steps) {
            if !recipe_names.contains(reference) {
                errors.push(format!("Recipe '{}' references unknown pattern '{}'.", recipe.name, reference));
            }
        }
    }

    for recipe in recipes {
        if reaches_itself(recipe, recipes) {
            errors.push(format!("{}.", RegExprError::RecipeCycle(recipe.name.clone())));
        }
    }

    fail_on(errors)
}

/// Problems visible in each recipe on its own: names and step lists.
fn entry_errors(recipes: &[PatternRecipe]) -> Vec<String> {
    let mut recipe_names = HashSet::new();
    let mut errors = Vec::new();

    for recipe in recipes {
        if recipe.name.is_empty() {
            errors.push("A recipe has an empty `name` field.".to_string());
        } else if !recipe_names.insert(recipe.name.as_str()) {
            errors.push(format!("Duplicate recipe name found: '{}'.", recipe.name));
        }

        if recipe.steps.is_empty() {
            errors.push(format!("Recipe '{}' has no `steps`.", recipe.name));
        }
    }
    errors
}

fn fail_on(errors: Vec<String>) -> Result<()> {
    if !errors.is_empty() {
        let full_error_message = format!("Recipe validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

/// Names referenced by `pattern:` operands, including inside inline steps.
fn references(steps: &[Step]) -> Vec<&str> {
    let mut found = Vec::new();
    for step in steps {
        for operand in step_operands(step) {
            match operand {
                Operand::Reference { pattern } => found.push(pattern.as_str()),
                Operand::Inline { steps } => found.extend(references(steps)),
                Operand::Literal(_) => {}
            }
        }
    }
    found
}

fn step_operands(step: &Step) -> Vec<&Operand> {
    match step {
        Step::Like(operand)
        | Step::Ahead(operand)
        | Step::NotAhead(operand)
        | Step::EitherFind(operand)
        | Step::OrFind(operand)
        | Step::Neither(operand)
        | Step::Nor(operand)
        | Step::Append(operand)
        | Step::Optional(operand) => vec![operand],
        Step::AnyOf(operands) => operands.iter().collect(),
        _ => Vec::new(),
    }
}

fn reaches_itself(start: &PatternRecipe, recipes: &[PatternRecipe]) -> bool {
    let mut seen = HashSet::new();
    let mut stack = references(&start.steps);

    while let Some(name) = stack.pop() {
        if name == start.name {
            return true;
        }
        if !seen.insert(name) {
            continue;
        }
        if let Some(next) = recipes.iter().find(|recipe| recipe.name == name) {
            stack.extend(references(&next.steps));
        }
    }
    false
}
