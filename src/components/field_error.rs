use yew::prelude::*;

use crate::viewmodels::FieldErrors;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub errors: FieldErrors,
    pub field: &'static str,
}

/// Mensaje de error bajo un campo del formulario
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match props.errors.get(props.field) {
        Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
        None => Html::default(),
    }
}

/// Clase extra para el input con error
pub fn error_class(errors: &FieldErrors, field: &str) -> Option<&'static str> {
    errors.get(field).map(|_| "input-error")
}

/// Valor actual de un input, textarea o select referenciado
pub fn input_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = node.cast::<web_sys::HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = node.cast::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
