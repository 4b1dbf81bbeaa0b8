pub mod use_resource_form;
pub mod use_resource_list;

pub use use_resource_form::{use_resource_form, ResourceForm};
pub use use_resource_list::{use_resource_list, ResourceList};
