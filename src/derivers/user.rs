use indexmap::IndexMap;

use crate::config::SessionConfig;
use crate::domain::game::UserType;
use crate::domain::user::{
    CurrentUser, RatedUser, RatingPageInfo, UserEntry, UserSettings, UserState, UsersRatingPage,
};
use crate::infra::preferences::ClientPreferences;

/// Первая страница лидерборда. `total_entries` неизвестен до первой подгрузки.
pub fn derive_rating_page(users: &[RatedUser], config: &SessionConfig) -> UsersRatingPage {
    UsersRatingPage {
        users: users.to_vec(),
        page_info: RatingPageInfo {
            page_number: 1,
            page_size: config.rating_page_size,
            total_entries: 0,
        },
        date_from: None,
        with_bots: false,
    }
}

/// Поддерево `user`: текущий пользователь (как зритель), рейтинг, настройки.
pub fn derive_user_state(
    current_user: Option<&CurrentUser>,
    rating: UsersRatingPage,
    prefs: &ClientPreferences,
) -> UserState {
    let mut users = IndexMap::new();
    if let Some(user) = current_user {
        users.insert(
            user.id,
            UserEntry {
                user: user.clone(),
                user_type: UserType::Spectator,
            },
        );
    }

    UserState {
        current_user_id: current_user.map(|u| u.id),
        users,
        users_stats: IndexMap::new(),
        users_rating_page: rating,
        settings: UserSettings {
            user: current_user.cloned(),
            mute: prefs.mute,
        },
    }
}
