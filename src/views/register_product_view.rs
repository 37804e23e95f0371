use yew::prelude::*;

use crate::components::field_error::{error_class, input_value, FieldError};
use crate::components::{AddressAutocomplete, PageHeader};
use crate::hooks::{use_api_client, use_navigator};
use crate::models::{Client, DistributionPoint, PlaceSelection, ResolvedAddress};
use crate::router::AppRoute;
use crate::services::ApiClient;
use crate::viewmodels::form_validation::{
    validate_product, DistributionPointChoice, DistributionPointForm, ProductForm, ProductSubmission,
};
use crate::viewmodels::FieldErrors;

/// Punto nuevo (si lo hay) antes del producto, que necesita su id
async fn submit_product(api: &ApiClient, submission: ProductSubmission) -> Result<(), String> {
    let mut product = submission.product;

    if let Some(point) = submission.new_point {
        let created = api.register_distribution_point(&point).await?;
        log::info!("✅ Punto de distribución {} registrado", created.id);
        product.fk_id_ponto_distribuicao = created.id;
    }

    let created = api.register_product(&product).await?;
    log::info!("✅ Producto {} registrado", created.id);
    Ok(())
}

#[function_component(RegisterProductView)]
pub fn register_product_view() -> Html {
    let navigator = use_navigator();
    let api = use_api_client();

    let nome_ref = use_node_ref();
    let preco_ref = use_node_ref();
    let descricao_ref = use_node_ref();
    let quantidade_ref = use_node_ref();
    let cliente_ref = use_node_ref();
    let ponto_ref = use_node_ref();
    let ponto_nome_ref = use_node_ref();
    let ponto_tipo_ref = use_node_ref();

    let clients = use_state(Vec::<Client>::new);
    let points = use_state(Vec::<DistributionPoint>::new);
    let new_point = use_state(|| false);
    let point_address = use_state(ResolvedAddress::default);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    // Clientes y puntos existentes para los selects
    {
        let api = api.clone();
        let clients = clients.clone();
        let points = points.clone();
        let new_point = new_point.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_clients().await {
                    Ok(loaded) => clients.set(loaded),
                    Err(e) => log::error!("❌ Error cargando clientes: {}", e),
                }
                match api.fetch_distribution_points().await {
                    Ok(loaded) => {
                        // Sin puntos registrados solo queda crear uno
                        if loaded.is_empty() {
                            new_point.set(true);
                        }
                        points.set(loaded);
                    }
                    Err(e) => log::error!("❌ Error cargando puntos de distribución: {}", e),
                }
            });
            || ()
        });
    }

    let on_place_select = {
        let point_address = point_address.clone();
        Callback::from(move |selection: PlaceSelection| match selection {
            PlaceSelection::Resolved { address, .. } => point_address.set(address),
            PlaceSelection::Cleared => point_address.set(ResolvedAddress::default()),
        })
    };

    let on_toggle_point = {
        let new_point = new_point.clone();
        Callback::from(move |_: MouseEvent| new_point.set(!*new_point))
    };

    let on_submit = {
        let refs = [
            nome_ref.clone(),
            descricao_ref.clone(),
            preco_ref.clone(),
            quantidade_ref.clone(),
            cliente_ref.clone(),
            ponto_ref.clone(),
            ponto_nome_ref.clone(),
            ponto_tipo_ref.clone(),
        ];
        let new_point = new_point.clone();
        let point_address = point_address.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        let navigate = navigator.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let [nome, descricao, preco, quantidade_estoque, fk_id_cliente, ponto, ponto_nome, ponto_tipo] =
                refs.each_ref().map(input_value);
            let ponto = if *new_point {
                DistributionPointChoice::New(DistributionPointForm {
                    nome: ponto_nome,
                    tipo: ponto_tipo,
                    address: (*point_address).clone(),
                })
            } else {
                DistributionPointChoice::Existing(ponto)
            };
            let form = ProductForm {
                nome,
                descricao,
                preco,
                quantidade_estoque,
                fk_id_cliente,
                ponto,
            };

            let submission = match validate_product(&form) {
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
                match submit_product(&api, submission).await {
                    Ok(()) => navigate.emit(AppRoute::AdminHome),
                    Err(e) => {
                        log::error!("❌ Error registrando producto: {}", e);
                        submit_error.set(Some("Não foi possível registrar o produto".to_string()));
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

    let point_section = if *new_point {
        html! {
            <div class="form-grid">
                { field("novoPontoDistribuicao.nome", "Nome", "text", &ponto_nome_ref) }
                { field("novoPontoDistribuicao.tipo", "Tipo", "text", &ponto_tipo_ref) }
                <div class="form-group col-span-2">
                    <label for="novoPontoDistribuicao.endereco">{"Endereço"}</label>
                    <AddressAutocomplete
                        id="novoPontoDistribuicao.endereco"
                        class={classes!(error_class(&errors, "novoPontoDistribuicao.endereco"))}
                        {on_place_select}
                    />
                    <FieldError errors={(*errors).clone()} field="novoPontoDistribuicao.endereco" />
                </div>
            </div>
        }
    } else {
        html! {
            <div class="form-group">
                <label for="fk_id_ponto_distribuicao">{"Ponto existente"}</label>
                <select
                    id="fk_id_ponto_distribuicao"
                    class={classes!("input", error_class(&errors, "fk_id_ponto_distribuicao"))}
                    ref={ponto_ref.clone()}
                >
                    <option value="" selected=true>{"Selecione..."}</option>
                    { for points.iter().map(|point| html! {
                        <option value={point.id.to_string()}>
                            {format!("{} ({}, {})", point.nome, point.end_rua, point.end_bairro)}
                        </option>
                    }) }
                </select>
                <FieldError errors={(*errors).clone()} field="fk_id_ponto_distribuicao" />
            </div>
        }
    };

    html! {
        <div class="page form-page">
            <PageHeader title="Registrar Produto" back={AppRoute::AdminHome} />
            <form class="card form-card" onsubmit={on_submit} novalidate=true>
                <div class="form-grid">
                    { field("nome", "Nome do Produto", "text", &nome_ref) }
                    { field("preco", "Preço", "text", &preco_ref) }
                    <div class="form-group col-span-2">
                        <label for="descricao">{"Descrição"}</label>
                        <textarea
                            id="descricao"
                            class={classes!("input", error_class(&errors, "descricao"))}
                            ref={descricao_ref.clone()}
                        />
                        <FieldError errors={(*errors).clone()} field="descricao" />
                    </div>
                    { field("quantidade_estoque", "Quantidade em Estoque", "number", &quantidade_ref) }
                    <div class="form-group">
                        <label for="fk_id_cliente">{"Cliente"}</label>
                        <select
                            id="fk_id_cliente"
                            class={classes!("input", error_class(&errors, "fk_id_cliente"))}
                            ref={cliente_ref.clone()}
                        >
                            <option value="" selected=true>{"Selecione..."}</option>
                            { for clients.iter().map(|client| html! {
                                <option value={client.id.to_string()}>{client.nome.clone()}</option>
                            }) }
                        </select>
                        <FieldError errors={(*errors).clone()} field="fk_id_cliente" />
                    </div>
                </div>

                <hr class="separator" />
                <div class="section-header">
                    <h2>{"Ponto de Distribuição"}</h2>
                    <button type="button" class="btn btn-ghost" onclick={on_toggle_point}>
                        { if *new_point { "Usar ponto existente" } else { "Cadastrar novo ponto" } }
                    </button>
                </div>
                { point_section }

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
