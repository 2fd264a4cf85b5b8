use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, info};

use crate::auth::AuthStore;
use crate::error::ComposerResult;
use crate::feedback::{Navigator, Notifier};
use crate::form::{CreatePostForm, SubmitOutcome};
use crate::record::PostRecord;

/// Коллекция постов на сервере.
///
/// Фьючерсы не обязаны быть `Send`: в браузере запрос живёт на единственном
/// потоке.
#[async_trait(?Send)]
pub trait PostsApi {
    /// Одна попытка `POST` поста. Любой ответ вне 2xx считается ошибкой.
    async fn create_post(&self, record: &PostRecord) -> ComposerResult<()>;
}

/// Публикует черновик формы.
///
/// Возвращает `None`, если предыдущая отправка ещё идёт: второй запрос в
/// этом случае не выполняется. Форма не заимствуется на время запроса,
/// поэтому её можно редактировать, пока он в пути.
pub async fn submit_post<A, P, N, V>(
    form: &RefCell<CreatePostForm<A>>,
    api: &P,
    notifier: &N,
    navigator: &V,
) -> Option<SubmitOutcome>
where
    A: AuthStore,
    P: PostsApi + ?Sized,
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    let record = form.borrow_mut().begin_submit(&Local::now());
    let Some(record) = record else {
        debug!("submit ignored, previous submission still in flight");
        return None;
    };

    info!(title = %record.title, author = %record.author, "publishing post");
    let result = api.create_post(&record).await;

    Some(form.borrow_mut().finish_submit(result, notifier, navigator))
}
