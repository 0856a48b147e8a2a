use beastrealm_core::ImageRef;
use yew::prelude::*;

use crate::context::ClientContext;

#[derive(Properties, PartialEq, Clone)]
pub struct GameImageProps {
    pub image: Option<ImageRef>,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` for a server image reference, resolved against the bundled index.
#[function_component(GameImage)]
pub fn game_image(props: &GameImageProps) -> Html {
    let ctx = use_context::<ClientContext>();
    let src = ctx.map_or_else(
        || crate::paths::image_url(&fallback_without_context(props.image.as_ref())),
        |ctx| ctx.image_src(props.image.as_ref()),
    );
    html! {
        <img class={props.class.clone()} src={src} alt={props.alt.clone()} loading="lazy" />
    }
}

fn fallback_without_context(image: Option<&ImageRef>) -> String {
    let config = crate::context::bundled_config();
    beastrealm_core::resolve(&beastrealm_core::AssetIndex::empty(), image, &config.fallback_image)
}
