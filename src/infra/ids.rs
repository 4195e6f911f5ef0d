use std::sync::atomic::{AtomicU64, Ordering};

/// Генерация синтетических id для строк конструктора задач.
///
/// Сервер не присылает id для параметров сигнатуры и примеров, а UI должен
/// как-то адресовать строку при редактировании. Счётчики монотонные, поэтому
/// в пределах одного прохода id уникальны и стабильны.
#[derive(Debug)]
pub struct LabelGenerator {
    param_counter: AtomicU64,
    example_counter: AtomicU64,
}

impl LabelGenerator {
    /// Генератор, начинающий с 1 для всех видов меток.
    pub fn new() -> Self {
        Self {
            param_counter: AtomicU64::new(1),
            example_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_param_id(&self) -> String {
        format!("param-{}", self.param_counter.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn next_example_id(&self) -> String {
        format!(
            "example-{}",
            self.example_counter.fetch_add(1, Ordering::Relaxed)
        )
    }
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new()
    }
}
