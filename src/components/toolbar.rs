use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub title: Option<AttrValue>,
    /// Hidden while zoomed so the toolbar never covers the enlarged image.
    pub hidden: bool,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let Some(title) = props.title.clone() else {
        return html! {};
    };
    if props.hidden {
        return html! {};
    }
    html! {<div style="position:absolute; top:0; left:0; right:0; padding:12px 16px; background:rgba(0,0,0,0.55); color:#e6edf3; font-size:16px; font-weight:600; pointer-events:none; white-space:nowrap; overflow:hidden; text-overflow:ellipsis;">
        { title }
    </div>}
}
