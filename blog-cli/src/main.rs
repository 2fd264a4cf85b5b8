use std::cell::RefCell;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use blog_client::{HttpPostsApi, HttpTimeouts, read_image_file};
use blog_composer::{
    AuthRecord, ComposerError, CreatePostForm, DEFAULT_AUTHOR, DraftField, ImageMode,
    SubmitOutcome, resolve_author, submit_post,
};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use validator::Validate;

mod auth_file;
mod console;
mod logging;
mod settings;

use auth_file::FileAuthStore;
use console::{ConsoleNavigator, ConsoleNotifier};
use logging::init_logging;
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI для публикации постов в блог")]
struct Cli {
    /// URL коллекции постов (перекрывает BLOG_POSTS_URL).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Файл с записью авторизации (перекрывает BLOG_AUTH_FILE).
    #[arg(long, global = true)]
    auth_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Создание и публикация поста.
    Create(PostArgs),
    /// JSON поста, который был бы отправлен, без отправки.
    Preview(PostArgs),
    /// Сохранить имя пользователя, которое подставляется автором.
    Login {
        #[arg(long)]
        username: String,
    },
    /// Удалить запись авторизации.
    Logout,
    /// Автор, который будет подставлен по умолчанию.
    Whoami,
}

#[derive(Debug, Args, Validate)]
struct PostArgs {
    /// Заголовок поста.
    #[arg(long)]
    #[validate(length(min = 1, message = "title is required"))]
    title: String,

    /// Автор; по умолчанию берётся из записи авторизации.
    #[arg(long)]
    author: Option<String>,

    /// Текст поста.
    #[arg(long)]
    #[validate(length(min = 1, message = "description is required"))]
    description: String,

    #[command(flatten)]
    image: ImageArgs,
}

#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
struct ImageArgs {
    /// URL обложки.
    #[arg(long)]
    image_url: Option<String>,

    /// Локальный файл обложки; кодируется в data-URL.
    #[arg(long)]
    image_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        settings.posts_url = endpoint;
    }
    if let Some(path) = cli.auth_file {
        settings.auth_file = path;
    }

    init_logging(&settings.log_level)?;

    let store = FileAuthStore::new(settings.auth_file.clone());

    match cli.command {
        Command::Create(args) => {
            let form = compose(&settings, store, args).await?;
            let api = HttpPostsApi::with_timeouts(
                settings.posts_url.clone(),
                HttpTimeouts {
                    connect: settings.http_timeout,
                    request: settings.http_timeout,
                },
            )
            .context("не удалось создать HTTP-клиент")?;

            let form = RefCell::new(form);
            match submit_post(&form, &api, &ConsoleNotifier, &ConsoleNavigator).await {
                Some(SubmitOutcome::Created) => {}
                Some(SubmitOutcome::Failed) | None => bail!("пост не опубликован"),
            }
        }
        Command::Preview(args) => {
            let form = compose(&settings, store, args).await?;
            let record = form.build_record(&Local::now());
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Login { username } => {
            let username = username.trim();
            if username.is_empty() {
                bail!("username не может быть пустым");
            }
            store
                .save(&AuthRecord::with_username(username))
                .context("не удалось сохранить запись авторизации")?;
            println!(
                "Автор по умолчанию: {username} ({})",
                store.path().display()
            );
        }
        Command::Logout => {
            let form = CreatePostForm::mount(settings.composer_config(), store);
            form.logout(&ConsoleNavigator)
                .context("не удалось удалить запись авторизации")?;
        }
        Command::Whoami => {
            println!("{}", resolve_author(&store, DEFAULT_AUTHOR));
        }
    }

    Ok(())
}

/// Заполняет форму так же, как это сделал бы пользователь на странице.
async fn compose(
    settings: &Settings,
    store: FileAuthStore,
    args: PostArgs,
) -> Result<CreatePostForm<FileAuthStore>> {
    args.validate().context("некорректные аргументы")?;

    let mut form = CreatePostForm::mount(settings.composer_config(), store);
    form.update_field(DraftField::Title, args.title);
    if let Some(author) = args.author {
        form.update_field(DraftField::Author, author);
    }
    form.update_field(DraftField::Description, args.description);

    if let Some(url) = args.image.image_url {
        form.choose_image_mode(ImageMode::Url);
        form.enter_image_url(url);
    } else if let Some(path) = args.image.image_file {
        form.choose_image_mode(ImageMode::File);
        let ticket = form
            .begin_file_read(path.display().to_string())
            .ok_or_else(|| anyhow!("выбор файла недоступен"))?;

        let data_url = read_image_file(&path).await.map_err(ComposerError::from);
        let failure = data_url.as_ref().err().map(ToString::to_string);
        if !form.complete_file_read(ticket, data_url) {
            bail!(
                "не удалось прочитать обложку {}: {}",
                path.display(),
                failure.unwrap_or_default()
            );
        }
    }

    Ok(form)
}
