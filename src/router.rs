use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Index,
    #[at("/guide")]
    Guide,
    #[not_found]
    #[at("/404")]
    NotFound,
}
