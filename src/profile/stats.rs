use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::UserId;
use crate::infra::keyed::deserialize_null_default;

/// Одна строка `stats.all`: сколько игр на языке с данным исходом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LangOutcomeCount {
    pub lang: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub count: u64,
    #[serde(default)]
    pub result: Option<String>,
}

/// `stats`: разбивка по языкам + счётчики исходов ("won", "lost", ...).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsBreakdown {
    pub all: Vec<LangOutcomeCount>,
    pub games: IndexMap<String, u64>,
}

impl StatsBreakdown {
    pub fn games_played(&self) -> u64 {
        self.games.values().sum()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    pub id: UserId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_bot: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub inserted_at: Option<String>,
    #[serde(default)]
    pub github_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub achievements: Vec<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ProfileUser {
    /// Ботам ранг не показываем.
    pub fn visible_rank(&self) -> Option<i64> {
        if self.is_bot {
            None
        } else {
            self.rank
        }
    }

    pub fn github_url(&self) -> Option<String> {
        self.github_name
            .as_ref()
            .map(|name| format!("https://github.com/{name}"))
    }

    pub fn parsed_achievements(&self) -> Vec<Achievement> {
        self.achievements.iter().map(|a| Achievement::parse(a)).collect()
    }
}

/// Ответ `GET /api/v1/user/{id}/stats` после нормализации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    #[serde(default)]
    pub stats: Option<StatsBreakdown>,
    pub user: ProfileUser,
}

/// Кусок круговой диаграммы: язык -> сумма игр.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LangSlice {
    pub name: String,
    pub value: u64,
}

/// Точка радара: исход -> количество, нормируется на максимум.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: String,
    pub value: u64,
    pub full_mark: u64,
}

impl RadarPoint {
    /// Доля от максимума в [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.full_mark == 0 {
            0.0
        } else {
            self.value as f64 / self.full_mark as f64
        }
    }
}

/// Данные для графиков профиля.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCharts {
    pub lang_slices: Vec<LangSlice>,
    pub radar: Vec<RadarPoint>,
}

impl ProfileCharts {
    pub fn from_stats(stats: &StatsBreakdown) -> Self {
        Self {
            lang_slices: lang_slices(stats),
            radar: outcome_radar(stats),
        }
    }
}

/// Группировка по языку с суммой `count`, по убыванию суммы.
///
/// Группы идут в порядке первого появления языка; сортировка стабильная,
/// поэтому равные суммы сохраняют этот порядок.
pub fn lang_slices(stats: &StatsBreakdown) -> Vec<LangSlice> {
    let mut groups: IndexMap<&str, u64> = IndexMap::new();
    for row in &stats.all {
        *groups.entry(row.lang.as_str()).or_insert(0) += row.count;
    }

    let mut slices: Vec<LangSlice> = groups
        .into_iter()
        .map(|(name, value)| LangSlice {
            name: name.to_string(),
            value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Точки радара: "won" первым, остальные по алфавиту.
pub fn outcome_radar(stats: &StatsBreakdown) -> Vec<RadarPoint> {
    let full_mark = stats.games.values().copied().max().unwrap_or(0);

    let mut points: Vec<RadarPoint> = stats
        .games
        .iter()
        .map(|(subject, value)| RadarPoint {
            subject: subject.clone(),
            value: *value,
            full_mark,
        })
        .collect();
    points.sort_by(|a, b| radar_order(&a.subject, &b.subject));
    points
}

fn radar_order(a: &str, b: &str) -> Ordering {
    match (a == "won", b == "won") {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Ачивка пользователя.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Achievement {
    /// `win_games_with?js_python_ruby` – победы на нескольких языках.
    Polyglot { raw: String, langs: Vec<String> },
    /// Обычная ачивка с картинкой по имени.
    Badge(String),
}

impl Achievement {
    pub fn parse(raw: &str) -> Self {
        if raw.contains("win_games_with") {
            let tail = raw.rsplit('?').next().unwrap_or_default();
            // Пустые сегменты (`js__ruby`) пропускаем: картинки без языка нет.
            let langs = tail
                .split('_')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            return Achievement::Polyglot {
                raw: raw.to_string(),
                langs,
            };
        }
        Achievement::Badge(raw.to_string())
    }

    /// Картинки ачивок: по одной на язык для полиглота.
    pub fn image_paths(&self) -> Vec<String> {
        match self {
            Achievement::Polyglot { langs, .. } => langs
                .iter()
                .map(|lang| format!("/assets/images/achievements/{lang}.png"))
                .collect(),
            Achievement::Badge(name) => vec![format!("/assets/images/achievements/{name}.png")],
        }
    }
}
