use yew::prelude::*;

use crate::components::field_error::{error_class, input_value, FieldError};
use crate::components::{AddressAutocomplete, PageHeader};
use crate::hooks::{use_api_client, use_navigator};
use crate::models::{PlaceSelection, RegisterVehicleData, ResolvedAddress};
use crate::router::AppRoute;
use crate::services::ApiClient;
use crate::viewmodels::form_validation::{validate_vehicle, DriverForm, VehicleForm, VehicleSubmission};
use crate::viewmodels::FieldErrors;

/// Motorista primero; su id completa el vehículo
async fn submit_vehicle(api: &ApiClient, submission: VehicleSubmission) -> Result<(), String> {
    let driver = api.register_driver(&submission.driver).await?;
    log::info!("✅ Motorista {} registrado", driver.id);

    let vehicle = api
        .register_vehicle(&RegisterVehicleData {
            modelo: submission.modelo,
            placa: submission.placa,
            capacidade: submission.capacidade,
            fk_id_motorista: driver.id,
        })
        .await?;
    log::info!("✅ Vehículo {} registrado", vehicle.id);
    Ok(())
}

#[function_component(RegisterVehicleView)]
pub fn register_vehicle_view() -> Html {
    let navigator = use_navigator();
    let api = use_api_client();

    let modelo_ref = use_node_ref();
    let placa_ref = use_node_ref();
    let capacidade_ref = use_node_ref();
    let nome_ref = use_node_ref();
    let habilitacao_ref = use_node_ref();
    let email_ref = use_node_ref();
    let senha_ref = use_node_ref();

    let address = use_state(ResolvedAddress::default);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    let on_place_select = {
        let address = address.clone();
        Callback::from(move |selection: PlaceSelection| match selection {
            PlaceSelection::Resolved { address: resolved, .. } => address.set(resolved),
            PlaceSelection::Cleared => address.set(ResolvedAddress::default()),
        })
    };

    let on_submit = {
        let refs = [
            modelo_ref.clone(),
            placa_ref.clone(),
            capacidade_ref.clone(),
            nome_ref.clone(),
            habilitacao_ref.clone(),
            email_ref.clone(),
            senha_ref.clone(),
        ];
        let address = address.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        let navigate = navigator.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let [modelo, placa, capacidade, nome, habilitacao, email, senha] =
                refs.each_ref().map(input_value);
            let form = VehicleForm {
                modelo,
                placa,
                capacidade,
                motorista: DriverForm {
                    nome,
                    habilitacao,
                    email,
                    senha,
                    address: (*address).clone(),
                },
            };

            let submission = match validate_vehicle(&form) {
                Ok(submission) => submission,
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
                match submit_vehicle(&api, submission).await {
                    Ok(()) => navigate.emit(AppRoute::AdminHome),
                    Err(e) => {
                        log::error!("❌ Error registrando vehículo: {}", e);
                        submit_error.set(Some("Não foi possível registrar o veículo".to_string()));
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
            <PageHeader title="Registrar Veículo" back={AppRoute::AdminHome} />
            <form class="card form-card" onsubmit={on_submit} novalidate=true>
                <div class="form-grid">
                    { field("modelo", "Modelo", "text", &modelo_ref) }
                    { field("placa", "Placa", "text", &placa_ref) }
                    { field("capacidade", "Capacidade (toneladas)", "text", &capacidade_ref) }
                </div>

                <hr class="separator" />
                <h2>{"Motorista"}</h2>
                <div class="form-grid">
                    { field("motorista.nome", "Nome", "text", &nome_ref) }
                    { field("motorista.habilitacao", "Habilitação", "text", &habilitacao_ref) }
                    <div class="form-group col-span-2">
                        <label for="motorista.endereco">{"Endereço"}</label>
                        <AddressAutocomplete
                            id="motorista.endereco"
                            class={classes!(error_class(&errors, "motorista.endereco"))}
                            {on_place_select}
                        />
                        <FieldError errors={(*errors).clone()} field="motorista.endereco" />
                    </div>
                    { field("motorista.email", "Email", "email", &email_ref) }
                    { field("motorista.senha", "Senha", "password", &senha_ref) }
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
