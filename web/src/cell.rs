use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CellProps {
    pub is_lit: bool,
    pub flip_cells_around_me: Callback<()>,
}

pub(crate) fn cell_class(is_lit: bool) -> Classes {
    classes!("Cell", is_lit.then_some("Cell-lit"))
}

#[function_component(CellView)]
pub(crate) fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        is_lit,
        flip_cells_around_me,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| flip_cells_around_me.emit(()));

    html! {
        <td class={cell_class(is_lit)} {onclick}/>
    }
}
