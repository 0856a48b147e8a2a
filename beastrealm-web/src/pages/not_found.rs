use yew::prelude::*;

/// Shown when the path matches no known route.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "页面不存在" }</h1>
            <p>{ "您访问的页面已移走或从未存在。" }</p>
            <button type="button" onclick={go_home}>{ "返回首页" }</button>
        </section>
    }
}
