use indexmap::IndexMap;

use crate::api::records::TaskRecord;
use crate::config::SessionConfig;
use crate::derivers::validation::derive_validation_statuses;
use crate::domain::builder::{
    AssertsStatus, BuilderState, TaskDraft, TaskTemplates, TemplatesState, ValidationStatuses,
};
use crate::infra::ids::LabelGenerator;

/// Черновик задачи: поля записи поверх пустого черновика,
/// каждой строке сигнатуры и каждому примеру – свежий синтетический id.
pub fn derive_task_draft(
    record: Option<&TaskRecord>,
    generator_lang: &str,
    labels: &LabelGenerator,
) -> TaskDraft {
    let blank = TaskDraft::blank(generator_lang);
    let Some(task) = record else {
        return blank;
    };

    let input_signature = task
        .input_signature
        .clone()
        .unwrap_or(blank.input_signature)
        .into_iter()
        .map(|mut entry| {
            entry.id = Some(labels.next_param_id());
            entry
        })
        .collect();

    let asserts_examples = task
        .asserts_examples
        .clone()
        .unwrap_or(blank.asserts_examples)
        .into_iter()
        .map(|mut example| {
            example.id = Some(labels.next_example_id());
            example
        })
        .collect();

    TaskDraft {
        id: task.id.or(blank.id),
        name: task.name.clone().unwrap_or(blank.name),
        level: task.level.unwrap_or(blank.level),
        state: task.state.unwrap_or(blank.state),
        description_en: task.description_en.clone().unwrap_or(blank.description_en),
        description_ru: task.description_ru.clone().unwrap_or(blank.description_ru),
        input_signature,
        output_signature: task.output_signature.clone().unwrap_or(blank.output_signature),
        asserts_examples,
        asserts: task.asserts.clone().unwrap_or(blank.asserts),
        examples: task.examples.clone().unwrap_or(blank.examples),
        solution: task.solution.clone().unwrap_or(blank.solution),
        arguments_generator: task
            .arguments_generator
            .clone()
            .unwrap_or(blank.arguments_generator),
        generator_lang: task.generator_lang.clone().unwrap_or(blank.generator_lang),
        visibility: task.visibility.unwrap_or(blank.visibility),
        tags: task.tags.clone().unwrap_or(blank.tags),
        origin: task.origin.clone().or(blank.origin),
        creator_id: task.creator_id.or(blank.creator_id),
    }
}

/// Шаблоны решения и генератора под язык генератора черновика.
///
/// Без задачи шаблоны ещё "грузятся" и пусты.
pub fn derive_task_templates(draft: Option<&TaskDraft>) -> TaskTemplates {
    let Some(draft) = draft else {
        return TaskTemplates::default();
    };

    let lang = draft.generator_lang.clone();
    let mut solution = IndexMap::new();
    solution.insert(lang.clone(), draft.solution.clone());
    let mut arguments_generator = IndexMap::new();
    arguments_generator.insert(lang, draft.arguments_generator.clone());

    TaskTemplates {
        state: TemplatesState::Ready,
        solution,
        arguments_generator,
    }
}

pub fn derive_asserts_status(record: Option<&TaskRecord>) -> AssertsStatus {
    let defaults = AssertsStatus::default();
    let Some(status) = record.and_then(|t| t.asserts_status.as_ref()) else {
        return defaults;
    };

    AssertsStatus {
        status: status.status.clone().unwrap_or(defaults.status),
        output: status.output.clone().unwrap_or(defaults.output),
    }
}

/// Поддерево `builder` без задачи.
pub fn default_builder_state(config: &SessionConfig) -> BuilderState {
    let task = TaskDraft::blank(config.generator_language.clone());
    let templates = TaskTemplates::default();

    BuilderState {
        generator_lang: task.generator_lang.clone(),
        task,
        text_arguments_generator: templates.arguments_generator.clone(),
        text_solution: templates.solution.clone(),
        templates,
        asserts_status: AssertsStatus::default(),
        validation_statuses: ValidationStatuses::defaults(),
    }
}

/// Поддерево `builder`.
///
/// Порядок важен: сначала черновик, потом шаблоны (читают язык генератора)
/// и статусы валидации (читают поля черновика).
pub fn derive_builder_state(
    record: Option<&TaskRecord>,
    config: &SessionConfig,
    labels: &LabelGenerator,
) -> BuilderState {
    if record.is_none() {
        return default_builder_state(config);
    }

    let task = derive_task_draft(record, &config.generator_language, labels);
    let templates = derive_task_templates(Some(&task));
    let validation_statuses = derive_validation_statuses(&task, &config.validation);

    tracing::debug!(
        params = task.input_signature.len(),
        examples = task.asserts_examples.len(),
        all_valid = validation_statuses.all_valid(),
        "derived task draft"
    );

    BuilderState {
        generator_lang: task.generator_lang.clone(),
        text_arguments_generator: templates.arguments_generator.clone(),
        text_solution: templates.solution.clone(),
        templates,
        asserts_status: derive_asserts_status(record),
        validation_statuses,
        task,
    }
}
