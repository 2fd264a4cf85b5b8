use std::fmt;
use std::str::FromStr;

use crate::error::ComposerError;

/// Поле черновика.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Заголовок.
    Title,
    /// Автор.
    Author,
    /// Текст поста.
    Description,
    /// Обложка: внешний URL или data-URL.
    ImageUrl,
}

impl DraftField {
    /// Все поля в порядке их следования в форме.
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Author,
        DraftField::Description,
        DraftField::ImageUrl,
    ];

    /// Имя поля в форме (атрибут `name` у input).
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Description => "description",
            Self::ImageUrl => "imageUrl",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = ComposerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == raw)
            .ok_or_else(|| ComposerError::UnknownField(raw.to_string()))
    }
}

/// Черновик поста. Живёт только в памяти, пока открыта страница.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Заголовок.
    pub title: String,
    /// Автор.
    pub author: String,
    /// Текст поста.
    pub description: String,
    /// Обложка: внешний URL, data-URL или пустая строка.
    pub image_url: String,
}

impl Draft {
    /// Пустой черновик с предзаполненным автором.
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Self::default()
        }
    }

    /// Значение поля.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::Description => &self.description,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    /// Заменяет одно поле, остальные не трогает.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Author => &mut self.author,
            DraftField::Description => &mut self.description,
            DraftField::ImageUrl => &mut self.image_url,
        };
        *slot = value.into();
    }

    /// Есть ли подготовленное изображение.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
