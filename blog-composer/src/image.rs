use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::StaleFileReads;

/// Откуда берётся следующая обложка.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageMode {
    /// Внешний URL.
    #[default]
    Url,
    /// Локальный файл.
    File,
}

impl ImageMode {
    /// Подпись вкладки.
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "Image URL",
            Self::File => "Upload File",
        }
    }
}

/// Квитанция на одно чтение файла. Результат чтения принимается только по
/// актуальной квитанции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReadTicket(u64);

impl FileReadTicket {
    /// Порядковый номер чтения.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Что показывает блок обложки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageView<'a> {
    /// Изображения нет: вкладки режима и поле ввода для `mode`.
    Picker {
        /// Активная вкладка.
        mode: ImageMode,
        /// Идёт чтение выбранного файла.
        reading: bool,
    },
    /// Изображение подготовлено: превью и кнопка удаления.
    Preview(&'a str),
}

/// Как закрылось чтение файла.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadSettlement {
    /// Квитанция актуальна.
    Current,
    /// Квитанция устарела, но политика разрешает применить результат.
    StaleAccepted,
    /// Квитанция устарела, результат отбрасывается.
    Rejected,
}

impl ReadSettlement {
    pub(crate) fn accepted(self) -> bool {
        self != Self::Rejected
    }
}

/// Состояние переключателя источника обложки. Само изображение хранится в
/// черновике (`Draft::image_url`), здесь только режим и чтения файлов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSelector {
    mode: ImageMode,
    selected_file: Option<String>,
    generation: u64,
    pending: Option<u64>,
}

impl ImageSelector {
    pub fn mode(&self) -> ImageMode {
        self.mode
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn choose(&mut self, mode: ImageMode) {
        if self.mode != mode {
            self.mode = mode;
            self.invalidate();
        }
    }

    pub(crate) fn begin_read(&mut self, file_name: String) -> FileReadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.selected_file = Some(file_name);
        FileReadTicket(self.generation)
    }

    /// Закрывает чтение. Более новое чтение, если оно идёт, не трогается.
    pub(crate) fn settle(
        &mut self,
        ticket: FileReadTicket,
        policy: StaleFileReads,
    ) -> ReadSettlement {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            return ReadSettlement::Current;
        }
        match policy {
            StaleFileReads::LastWins => ReadSettlement::StaleAccepted,
            StaleFileReads::Discard => ReadSettlement::Rejected,
        }
    }

    pub(crate) fn forget_file(&mut self) {
        self.selected_file = None;
    }

    /// Назад в `NoImage[url]`.
    pub(crate) fn reset(&mut self) {
        self.mode = ImageMode::Url;
        self.selected_file = None;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Кодирует содержимое файла в data-URL: `data:<mime>;base64,<payload>`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        "application/octet-stream"
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
