use leptos::prelude::*;

use super::*;

/// Composition root. Section order is fixed.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar />
            <main>
                <Hero />
                <ServiceList />
                <DevelopmentSection />
                <TrustSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
