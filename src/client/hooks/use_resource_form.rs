use dioxus::prelude::*;

use crate::{
    client::{hooks::ResourceList, resource::Resource},
    model::validation::ValidationError,
};

/// Input being edited for one resource, plus the form's own flags
pub struct ResourceForm<R: Resource> {
    pub input: Signal<R::Input>,
    /// Id of the row being edited, `None` while creating
    pub editing: Signal<Option<i32>>,
    pub error: Signal<Option<String>>,
    pub submitting: Signal<bool>,
}

impl<R: Resource> Clone for ResourceForm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceForm<R> {}

impl<R: Resource> ResourceForm<R> {
    pub fn is_editing(&self) -> bool {
        self.editing.read().is_some()
    }

    pub fn edit(mut self, dto: &R::Dto) {
        use crate::model::record_list::Record;

        self.input.set(R::to_input(dto));
        self.editing.set(Some(dto.id()));
        self.error.set(None);
    }

    pub fn reset(mut self) {
        self.input.set(R::blank());
        self.editing.set(None);
        self.error.set(None);
    }

    pub async fn submit(self, resources: ResourceList<R>) {
        self.submit_checked(resources, |_| Ok(())).await
    }

    /// Validates, persists through `resources` and clears the form once the request succeeds.
    ///
    /// `check` runs after the input's own validation, for rules that need other records.
    pub async fn submit_checked(
        mut self,
        resources: ResourceList<R>,
        check: impl FnOnce(&R::Input) -> Result<(), ValidationError>,
    ) {
        if *self.submitting.peek() {
            return;
        }

        let input = self.input.peek().clone();
        if let Err(err) = R::validate(&input).and_then(|_| check(&input)) {
            self.error.set(Some(err.to_string()));
            return;
        }

        self.error.set(None);
        self.submitting.set(true);

        let editing = *self.editing.peek();
        let saved = match editing {
            Some(id) => resources.update(id, input).await,
            None => resources.create(input).await,
        };

        self.submitting.set(false);

        if saved {
            self.reset();
        }
    }
}

pub fn use_resource_form<R: Resource>() -> ResourceForm<R> {
    ResourceForm {
        input: use_signal(R::blank),
        editing: use_signal(|| None),
        error: use_signal(|| None),
        submitting: use_signal(|| false),
    }
}
