use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{Footer, Header};
use crate::config::SiteEnvironment;
use crate::views::{AboutPage, BrandsPage, CommunityPage, HomePage, NotFoundPage, TalentPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteEnvironment::detect());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/fashion-nights.css"/>

        <Title text="Creative Agency | Fashion Nights"/>

        <ConfigProvider>
            <ToasterProvider>
                <Router>
                    <div class="site">
                        <Header/>
                        <main class="site__main">
                            <Routes fallback=|| view! { <NotFoundPage/> }>
                                <Route path=StaticSegment("") view=HomePage/>
                                <Route path=StaticSegment("about") view=AboutPage/>
                                <Route path=StaticSegment("talent") view=TalentPage/>
                                <Route path=StaticSegment("brands") view=BrandsPage/>
                                <Route path=StaticSegment("community") view=CommunityPage/>
                            </Routes>
                        </main>
                        <Footer/>
                    </div>
                </Router>
            </ToasterProvider>
        </ConfigProvider>
    }
}
