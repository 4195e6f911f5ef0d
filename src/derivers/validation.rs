use std::collections::HashSet;

use crate::config::ValidationConfig;
use crate::domain::builder::{TaskDraft, TaskField, ValidationStatus, ValidationStatuses};

/// Правило валидации одного поля черновика.
pub type Validator = fn(&TaskDraft, &ValidationConfig) -> ValidationStatus;

/// Реестр именованных правил: поле -> предикат.
///
/// Добавить валидируемое поле = зарегистрировать правило. Поля без правила
/// сохраняют стартовый маркер из `ValidationStatuses::defaults()`.
#[derive(Clone, Debug)]
pub struct ValidatorRegistry {
    rules: ValidationConfig,
    validators: Vec<(TaskField, Validator)>,
}

impl ValidatorRegistry {
    /// Пустой реестр.
    pub fn new(rules: ValidationConfig) -> Self {
        Self {
            rules,
            validators: Vec::new(),
        }
    }

    /// Стандартный набор: название, описание, входная сигнатура, примеры.
    pub fn standard(rules: ValidationConfig) -> Self {
        let mut registry = Self::new(rules);
        registry.register(TaskField::Name, validate_task_name);
        registry.register(TaskField::Description, validate_description);
        registry.register(TaskField::InputSignature, validate_input_signature);
        registry.register(TaskField::AssertsExamples, validate_examples);
        registry
    }

    /// Зарегистрировать правило (повторная регистрация поля заменяет правило).
    pub fn register(&mut self, field: TaskField, validator: Validator) {
        if let Some(slot) = self.validators.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = validator;
        } else {
            self.validators.push((field, validator));
        }
    }

    pub fn validated_fields(&self) -> impl Iterator<Item = TaskField> + '_ {
        self.validators.iter().map(|(f, _)| *f)
    }

    /// Прогнать все правила по черновику.
    pub fn evaluate(&self, draft: &TaskDraft) -> ValidationStatuses {
        let mut statuses = ValidationStatuses::defaults();
        for (field, validator) in &self.validators {
            statuses.set(*field, validator(draft, &self.rules));
        }
        statuses
    }
}

/// Статусы валидации черновика стандартным набором правил.
pub fn derive_validation_statuses(draft: &TaskDraft, rules: &ValidationConfig) -> ValidationStatuses {
    ValidatorRegistry::standard(rules.clone()).evaluate(draft)
}

pub fn validate_task_name(draft: &TaskDraft, rules: &ValidationConfig) -> ValidationStatus {
    let len = draft.name.trim().chars().count();
    if len < rules.min_name_length {
        return ValidationStatus::invalid(format!(
            "Name must be at least {} characters",
            rules.min_name_length
        ));
    }
    if len > rules.max_name_length {
        return ValidationStatus::invalid(format!(
            "Name must be at most {} characters",
            rules.max_name_length
        ));
    }
    ValidationStatus::valid()
}

/// Проверяется английское описание: оно обязательно, русское – нет.
pub fn validate_description(draft: &TaskDraft, rules: &ValidationConfig) -> ValidationStatus {
    let description = draft.description_en.trim();
    if description.is_empty() {
        return ValidationStatus::invalid("Description is required");
    }
    if description.chars().count() > rules.max_description_length {
        return ValidationStatus::invalid(format!(
            "Description must be at most {} characters",
            rules.max_description_length
        ));
    }
    ValidationStatus::valid()
}

pub fn validate_input_signature(draft: &TaskDraft, _rules: &ValidationConfig) -> ValidationStatus {
    if draft.input_signature.is_empty() {
        return ValidationStatus::invalid("Input parameters are required");
    }

    let mut seen = HashSet::new();
    for entry in &draft.input_signature {
        let name = entry.argument_name.trim();
        if name.is_empty() {
            return ValidationStatus::invalid("Every parameter needs a name");
        }
        let has_type = entry
            .arg_type
            .as_ref()
            .map(|t| !t.name.trim().is_empty())
            .unwrap_or(false);
        if !has_type {
            return ValidationStatus::invalid(format!("Parameter `{name}` has no type"));
        }
        if !seen.insert(name) {
            return ValidationStatus::invalid(format!("Parameter `{name}` is declared twice"));
        }
    }

    ValidationStatus::valid()
}

pub fn validate_examples(draft: &TaskDraft, _rules: &ValidationConfig) -> ValidationStatus {
    if draft.asserts_examples.is_empty() {
        return ValidationStatus::invalid("Examples are required");
    }

    let arity = draft.input_signature.len();
    for (index, example) in draft.asserts_examples.iter().enumerate() {
        if example.arguments.len() != arity {
            return ValidationStatus::invalid(format!(
                "Example #{} has {} arguments, expected {}",
                index + 1,
                example.arguments.len(),
                arity
            ));
        }
        if example.expected.is_none() {
            return ValidationStatus::invalid(format!(
                "Example #{} has no expected value",
                index + 1
            ));
        }
    }

    ValidationStatus::valid()
}
