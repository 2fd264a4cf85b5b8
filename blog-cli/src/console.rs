use blog_composer::{Navigator, NoticeLevel, Notifier};
use tracing::info;

/// Уведомления в терминал: ошибки в stderr, остальное в stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => eprintln!("{} {message}", prefix(level)),
            NoticeLevel::Success | NoticeLevel::Info => println!("{} {message}", prefix(level)),
        }
    }
}

fn prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Error => "[error]",
        NoticeLevel::Info => "[info]",
    }
}

/// В терминале экранов нет, поэтому переход только печатается.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        info!(%route, "navigate");
        println!("-> {route}");
    }
}
