use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_place_resolver;
use crate::models::PlaceSelection;

#[derive(Properties, PartialEq)]
pub struct AddressAutocompleteProps {
    pub on_place_select: Callback<PlaceSelection>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::from("Digite o endereço"))]
    pub placeholder: AttrValue,
}

/// Campo de dirección con sugerencias de Google Places
#[function_component(AddressAutocomplete)]
pub fn address_autocomplete(props: &AddressAutocompleteProps) -> Html {
    let resolver = use_place_resolver(props.on_place_select.clone());

    let oninput = {
        let on_input = resolver.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let open = !resolver.suggestions.is_empty();

    html! {
        <div class="autocomplete">
            <div class="autocomplete-field">
                <input
                    type="text"
                    id={props.id.clone()}
                    class={classes!("input", props.class.clone())}
                    placeholder={props.placeholder.clone()}
                    autocomplete="off"
                    role="combobox"
                    aria-expanded={open.to_string()}
                    value={resolver.input.clone()}
                    {oninput}
                    onkeydown={resolver.on_keydown.clone()}
                />
                if !resolver.input.is_empty() {
                    <button
                        type="button"
                        class="autocomplete-clear"
                        aria-label="Limpar endereço"
                        onclick={resolver.on_clear.reform(|_| ())}
                    >
                        {"×"}
                    </button>
                }
            </div>
            if open {
                <ul class="autocomplete-list" role="listbox">
                    { for resolver.suggestions.iter().enumerate().map(|(index, suggestion)| {
                        let active = resolver.highlighted == Some(index);
                        // mousedown: se dispara antes del blur del input
                        let onmousedown = {
                            let on_activate = resolver.on_activate.clone();
                            let id = suggestion.id.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_activate.emit(id.clone());
                            })
                        };
                        html! {
                            <li
                                key={suggestion.id.clone()}
                                class={classes!("autocomplete-item", active.then_some("active"))}
                                role="option"
                                aria-selected={active.to_string()}
                                {onmousedown}
                            >
                                {suggestion.label.clone()}
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
