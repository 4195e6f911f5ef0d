use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::domain::UserId;
use crate::infra::keyed::deserialize_null_default;

/// Сложность задачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskLevel {
    #[default]
    Elementary,
    Easy,
    Medium,
    Hard,
}

/// Статус задачи в конструкторе.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStateCode {
    #[default]
    None,
    Blank,
    Draft,
    OnModeration,
    Active,
    Disabled,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskVisibility {
    #[default]
    Hidden,
    Public,
}

/// Тип аргумента/результата: `{ name: "array", nested: { name: "integer" } }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeSignature {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<Box<TypeSignature>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TypeSignature {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: None,
            extra: IndexMap::new(),
        }
    }
}

/// Один входной параметр задачи.
///
/// `id` – синтетический, его выдаёт конструктор, чтобы UI мог адресовать строку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputSignatureEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub argument_name: String,
    #[serde(rename = "type", default)]
    pub arg_type: Option<TypeSignature>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputSignature {
    #[serde(rename = "type")]
    pub output_type: TypeSignature,
}

impl Default for OutputSignature {
    fn default() -> Self {
        Self {
            output_type: TypeSignature::named("integer"),
        }
    }
}

/// Пример (assert) задачи: аргументы + ожидаемый результат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssertExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub arguments: Vec<Value>,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Черновик задачи в конструкторе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub id: Option<i64>,
    pub name: String,
    pub level: TaskLevel,
    pub state: TaskStateCode,
    pub description_en: String,
    pub description_ru: String,
    pub input_signature: Vec<InputSignatureEntry>,
    pub output_signature: OutputSignature,
    pub asserts_examples: Vec<AssertExample>,
    pub asserts: Vec<Value>,
    pub examples: String,
    pub solution: String,
    pub arguments_generator: String,
    pub generator_lang: String,
    pub visibility: TaskVisibility,
    pub tags: Vec<String>,
    pub origin: Option<String>,
    pub creator_id: Option<UserId>,
}

impl TaskDraft {
    /// Пустой черновик; язык генератора берётся из конфига.
    pub fn blank(generator_lang: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            level: TaskLevel::Elementary,
            state: TaskStateCode::None,
            description_en: String::new(),
            description_ru: String::new(),
            input_signature: Vec::new(),
            output_signature: OutputSignature::default(),
            asserts_examples: Vec::new(),
            asserts: Vec::new(),
            examples: String::new(),
            solution: String::new(),
            arguments_generator: String::new(),
            generator_lang: generator_lang.into(),
            visibility: TaskVisibility::Hidden,
            tags: Vec::new(),
            origin: None,
            creator_id: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemplatesState {
    #[default]
    Loading,
    /// Шаблоны получены, но ещё не подставлены в буферы.
    Init,
    Ready,
    Error,
}

/// Шаблоны решения и генератора аргументов: язык -> исходник.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplates {
    pub state: TemplatesState,
    pub solution: IndexMap<String, String>,
    pub arguments_generator: IndexMap<String, String>,
}

/// Результат последнего прогона примеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertsStatus {
    pub status: String,
    pub output: String,
}

impl Default for AssertsStatus {
    fn default() -> Self {
        Self {
            status: "none".to_string(),
            output: String::new(),
        }
    }
}

/// Поле черновика, у которого есть статус валидации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TaskField {
    Name,
    Description,
    Solution,
    ArgumentsGenerator,
    InputSignature,
    OutputSignature,
    AssertsExamples,
}

impl TaskField {
    pub const ALL: [TaskField; 7] = [
        TaskField::Name,
        TaskField::Description,
        TaskField::Solution,
        TaskField::ArgumentsGenerator,
        TaskField::InputSignature,
        TaskField::OutputSignature,
        TaskField::AssertsExamples,
    ];
}

/// Маркер валидности поля. На проводе: `[true]` или `[false, "причина"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationStatus {
    pub valid: bool,
    pub reason: Option<String>,
}

impl ValidationStatus {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// Невалидно, но без сообщения (стартовый маркер пустого черновика).
    pub fn unchecked() -> Self {
        Self {
            valid: false,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

impl Serialize for ValidationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.reason.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.valid)?;
        if let Some(reason) = &self.reason {
            seq.serialize_element(reason)?;
        }
        seq.end()
    }
}

/// Статусы валидации по всем полям черновика.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationStatuses(pub IndexMap<TaskField, ValidationStatus>);

impl ValidationStatuses {
    /// Стартовые маркеры для пустого черновика.
    pub fn defaults() -> Self {
        let map = TaskField::ALL
            .iter()
            .map(|field| {
                let status = match field {
                    TaskField::Solution
                    | TaskField::ArgumentsGenerator
                    | TaskField::OutputSignature => ValidationStatus::valid(),
                    TaskField::Name
                    | TaskField::Description
                    | TaskField::InputSignature
                    | TaskField::AssertsExamples => ValidationStatus::unchecked(),
                };
                (*field, status)
            })
            .collect();
        Self(map)
    }

    pub fn get(&self, field: TaskField) -> Option<&ValidationStatus> {
        self.0.get(&field)
    }

    pub fn set(&mut self, field: TaskField, status: ValidationStatus) {
        self.0.insert(field, status);
    }

    pub fn is_complete(&self) -> bool {
        TaskField::ALL.iter().all(|f| self.0.contains_key(f))
    }

    pub fn all_valid(&self) -> bool {
        self.0.values().all(|s| s.valid)
    }
}

impl Default for ValidationStatuses {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Поддерево `builder`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    pub task: TaskDraft,
    pub templates: TaskTemplates,
    pub asserts_status: AssertsStatus,
    pub validation_statuses: ValidationStatuses,
    pub text_arguments_generator: IndexMap<String, String>,
    pub text_solution: IndexMap<String, String>,
    pub generator_lang: String,
}
