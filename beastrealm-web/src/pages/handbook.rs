use beastrealm_core::FieldState;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{HandbookIndex, HandbookPet, HandbookPetResponse};
use crate::components::game_image::GameImage;
use crate::components::status::status_line;
use crate::context::{ClientContext, endpoint_url};
use crate::hooks::use_api;
use crate::router::Route;

#[function_component(HandbookPage)]
pub fn handbook_page() -> Html {
    let ctx = use_context::<ClientContext>();
    let (state, reload) = use_api::<HandbookIndex>(endpoint_url(ctx.as_ref(), "/handbook/index"));
    html! { <HandbookIndexView {state} on_retry={reload} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HandbookIndexViewProps {
    pub state: FieldState<HandbookIndex>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(HandbookIndexView)]
pub fn handbook_index_view(props: &HandbookIndexViewProps) -> Html {
    let Some(index) = props.state.ready() else {
        return status_line(&props.state, &props.on_retry);
    };
    let title = if index.title.is_empty() {
        "【图鉴】"
    } else {
        index.title.as_str()
    };
    html! {
        <section class="panel handbook">
            <h1>{ title }</h1>
            <ul class="handbook__grid">
                { for index.pets.iter().map(|pet| html! {
                    <li key={pet.id}>
                        <Link<Route> to={Route::HandbookPet { id: pet.id }}>
                            <GameImage image={pet.image.clone()} alt={AttrValue::from(pet.name.clone())} />
                            <span>{ pet.name.clone() }</span>
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HandbookPetPageProps {
    pub id: u32,
}

#[function_component(HandbookPetPage)]
pub fn handbook_pet_page(props: &HandbookPetPageProps) -> Html {
    let ctx = use_context::<ClientContext>();
    let url = endpoint_url(ctx.as_ref(), &format!("/handbook/pets/{}", props.id));
    let (state, reload) = use_api::<HandbookPetResponse>(url);
    let state = match state {
        FieldState::Ready(HandbookPetResponse { pet: Some(pet), .. }) => FieldState::Ready(pet),
        FieldState::Ready(_) | FieldState::Failed => FieldState::Failed,
        FieldState::Loading => FieldState::Loading,
        FieldState::Unavailable => FieldState::Unavailable,
    };
    html! { <HandbookPetView {state} on_retry={reload} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HandbookPetViewProps {
    pub state: FieldState<HandbookPet>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(HandbookPetView)]
pub fn handbook_pet_view(props: &HandbookPetViewProps) -> Html {
    let Some(pet) = props.state.ready() else {
        return status_line(&props.state, &props.on_retry);
    };
    let row = |label: &'static str, value: &Option<String>| {
        value.as_ref().map(|value| html! {
            <div class="handbook-pet__row"><dt>{ label }</dt><dd>{ value.clone() }</dd></div>
        }).unwrap_or_default()
    };
    html! {
        <section class="panel handbook-pet">
            <h1>{ pet.name.clone() }</h1>
            <GameImage class={classes!("handbook-pet__image")} image={pet.image.clone()}
                alt={AttrValue::from(pet.name.clone())} />
            <dl>
                { row("稀有度", &pet.rarity) }
                { row("性格", &pet.nature) }
                { row("出没地点", &pet.location) }
            </dl>
            if !pet.skills.is_empty() {
                <h2>{ "技能" }</h2>
                <ul class="handbook-pet__skills">
                    { for pet.skills.iter().map(|skill| html! { <li>{ skill.name.clone() }</li> }) }
                </ul>
            }
            <Link<Route> to={Route::Handbook}>{ "返回图鉴" }</Link<Route>>
        </section>
    }
}
