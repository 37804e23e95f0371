use yew::prelude::*;

use crate::components::field_error::{error_class, input_value, FieldError};
use crate::components::PageHeader;
use crate::hooks::{use_api_client, use_navigator};
use crate::router::AppRoute;
use crate::viewmodels::form_validation::{validate_client, ClientForm};
use crate::viewmodels::FieldErrors;

#[function_component(RegisterClientView)]
pub fn register_client_view() -> Html {
    let navigator = use_navigator();
    let api = use_api_client();

    let nome_ref = use_node_ref();
    let telefone_ref = use_node_ref();
    let endereco_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    let on_submit = {
        let refs = (
            nome_ref.clone(),
            telefone_ref.clone(),
            endereco_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
        );
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        let navigate = navigator.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let form = ClientForm {
                nome: input_value(&refs.0),
                telefone: input_value(&refs.1),
                endereco: input_value(&refs.2),
                email: input_value(&refs.3),
                password: input_value(&refs.4),
            };

            let data = match validate_client(&form) {
                Ok(data) => data,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::new());
            submitting.set(true);

            let api = api.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.register_client(&data).await {
                    Ok(client) => {
                        log::info!("✅ Cliente {} registrado", client.id);
                        navigate.emit(AppRoute::AdminHome);
                    }
                    Err(e) => {
                        log::error!("❌ Error registrando cliente: {}", e);
                        submit_error.set(Some("Não foi possível registrar o cliente".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field = |id: &'static str, label: &'static str, kind: &'static str, node: &NodeRef| {
        html! {
            <div class="form-group">
                <label for={id}>{label}</label>
                <input type={kind} id={id} class={classes!("input", error_class(&errors, id))} ref={node.clone()} />
                <FieldError errors={(*errors).clone()} field={id} />
            </div>
        }
    };

    html! {
        <div class="page form-page">
            <PageHeader title="Registrar Cliente" back={AppRoute::AdminHome} />
            <form class="card form-card" onsubmit={on_submit} novalidate=true>
                <div class="form-grid">
                    { field("nome", "Nome", "text", &nome_ref) }
                    { field("telefone", "Telefone", "tel", &telefone_ref) }
                    { field("endereco", "Endereço", "text", &endereco_ref) }
                    { field("email", "Email", "email", &email_ref) }
                    { field("password", "Senha", "password", &password_ref) }
                </div>
                if let Some(error) = &*submit_error {
                    <p class="form-error">{error.clone()}</p>
                }
                <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                    { if *submitting { "Registrando..." } else { "Registrar" } }
                </button>
            </form>
        </div>
    }
}
