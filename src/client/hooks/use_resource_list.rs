use std::marker::PhantomData;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        resource::Resource,
        store::{toast::ToastState, user::UserState},
    },
    model::record_list::{Notice, RecordList},
};

/// Rows of one resource mirrored into component state.
///
/// Every component calling [`use_resource_list`] gets its own copy; nothing is shared
/// between instances.
pub struct ResourceList<R: Resource> {
    pub list: Signal<RecordList<R::Dto>>,
    toasts: Signal<ToastState>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceList<R> {}

impl<R: Resource> ResourceList<R> {
    fn notify(mut self, notice: Notice) {
        if notice.is_error() {
            tracing::error!("{}: {}", R::PATH, notice.message);
        }

        self.toasts.write().push(notice);
    }

    /// Replaces local state with every row visible to the session user
    pub async fn fetch(mut self) {
        let result = api::get::<Vec<R::Dto>>(R::PATH).await;
        let notice = self.list.write().settle_fetch(result, &R::MESSAGES);

        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    /// Returns whether the row was created
    pub async fn create(mut self, input: R::Input) -> bool {
        let result = api::post::<_, R::Dto>(R::PATH, &input).await;
        let notice = self.list.write().settle_create(result, &R::MESSAGES);
        let created = !notice.is_error();
        self.notify(notice);

        created
    }

    /// Returns whether the row was updated
    pub async fn update(mut self, id: i32, input: R::Input) -> bool {
        let result = api::put::<_, R::Dto>(&R::item_path(id), &input).await;
        let notice = self.list.write().settle_update(result, &R::MESSAGES);
        let updated = !notice.is_error();
        self.notify(notice);

        updated
    }

    pub async fn delete(mut self, id: i32) -> bool {
        let result = api::delete(&R::item_path(id)).await;
        let notice = self.list.write().settle_delete(id, result, &R::MESSAGES);
        let deleted = !notice.is_error();
        self.notify(notice);

        deleted
    }
}

/// Loads the resource once a user session is known and exposes its mutations
pub fn use_resource_list<R: Resource>() -> ResourceList<R> {
    let user_store = use_context::<Store<UserState>>();
    let toasts = use_context::<Signal<ToastState>>();
    let list = use_signal(RecordList::<R::Dto>::new);

    let resources = ResourceList::<R> {
        list,
        toasts,
        _resource: PhantomData,
    };

    use_effect(move || {
        if user_store.read().user.is_some() {
            spawn(resources.fetch());
        }
    });

    resources
}
