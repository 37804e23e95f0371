use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::field_error::{error_class, FieldError};
use crate::viewmodels::form_validation::{validate_login, LoginForm};
use crate::viewmodels::FieldErrors;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let errors = use_state(FieldErrors::new);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let errors = errors.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let form = LoginForm {
                email: email_input.value(),
                password: password_input.value(),
            };

            match validate_login(&form) {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    on_login.emit((form.email.trim().to_string(), form.password));
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container card">
                <div class="login-header">
                    <div class="login-logo">{"🚚"}</div>
                    <h1>{"Entregas"}</h1>
                    <p>{"Faça login para continuar"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            class={classes!("input", error_class(&errors, "email"))}
                            placeholder="seu@email.com"
                            ref={email_ref}
                        />
                        <FieldError errors={(*errors).clone()} field="email" />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Senha"}</label>
                        <input
                            type="password"
                            id="password"
                            class={classes!("input", error_class(&errors, "password"))}
                            ref={password_ref}
                        />
                        <FieldError errors={(*errors).clone()} field="password" />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{error.clone()}</p>
                    }

                    <button type="submit" class="btn btn-primary btn-block" disabled={props.loading}>
                        { if props.loading { "Entrando..." } else { "Entrar" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
