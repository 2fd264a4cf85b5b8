use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::Draft;

/// Пост в том виде, в каком он уходит на сервер.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Заголовок.
    pub title: String,
    /// Автор.
    pub author: String,
    /// Текст поста.
    pub description: String,
    /// Обложка; если не выбрана, то заглушка.
    pub image: String,
    /// Дата для показа, например `January 5, 2024`.
    pub date: String,
    /// Момент создания в ISO-8601 (UTC, миллисекунды).
    pub created_at: String,
}

impl PostRecord {
    /// Собирает пост из черновика на момент `now`.
    pub fn from_draft<Tz>(draft: &Draft, placeholder_image_url: &str, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let image = if draft.has_image() {
            draft.image_url.clone()
        } else {
            placeholder_image_url.to_string()
        };

        Self {
            title: draft.title.clone(),
            author: draft.author.clone(),
            description: draft.description.clone(),
            image,
            date: long_date(now),
            created_at: iso_timestamp(now),
        }
    }
}

/// `January 5, 2024` в часовом поясе `now`.
pub fn long_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%B %-d, %Y").to_string()
}

/// `2024-01-05T10:00:00.000Z`.
pub fn iso_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn sample_draft(image_url: &str) -> Draft {
        Draft {
            title: "Title".to_string(),
            author: "alice".to_string(),
            description: "Body".to_string(),
            image_url: image_url.to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn empty_image_uses_placeholder() {
        let record = PostRecord::from_draft(&sample_draft(""), "https://placeholder/x.png", &fixed_now());
        assert_eq!(record.image, "https://placeholder/x.png");
    }

    #[test]
    fn staged_image_is_kept() {
        let record =
            PostRecord::from_draft(&sample_draft("https://x/img.png"), "https://placeholder/x.png", &fixed_now());
        assert_eq!(record.image, "https://x/img.png");
    }

    #[test]
    fn dates_are_formatted_like_the_posts_feed_expects() {
        let record = PostRecord::from_draft(&sample_draft(""), "p", &fixed_now());
        assert_eq!(record.date, "January 5, 2024");
        assert_eq!(record.created_at, "2024-01-05T10:00:00.000Z");
    }

    #[test]
    fn long_date_uses_local_calendar_day() {
        let offset = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        let late_evening_utc = Utc
            .with_ymd_and_hms(2024, 1, 5, 22, 30, 0)
            .single()
            .expect("valid timestamp")
            .with_timezone(&offset);

        assert_eq!(long_date(&late_evening_utc), "January 6, 2024");
        assert_eq!(iso_timestamp(&late_evening_utc), "2024-01-05T22:30:00.000Z");
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = PostRecord::from_draft(&sample_draft(""), "p", &fixed_now());
        let json = serde_json::to_value(&record).expect("must serialize");

        let mut keys: Vec<_> = json
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        assert_eq!(
            keys,
            ["author", "createdAt", "date", "description", "image", "title"]
        );
    }
}
