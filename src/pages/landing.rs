use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::components::services::Services;
use crate::components::stats::StatsBand;
use crate::content::{BRAND, SERVICES, STATS};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_toast: Callback<String>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <main class="landing-page">
            // Keyframes for the submit button spinner.
            <style>
                {r#"
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>

            <Hero id="accueil" />

            <Services id="services" services={SERVICES} />

            <StatsBand id="chiffres" stats={STATS} />

            <section id="apropos" class="about">
                <div class="container about-grid">
                    <Reveal>
                        <h2>{"Un cabinet ancré sur le terrain"}</h2>
                    </Reveal>
                    <Reveal>
                        <p>
                            {"Nos consultants réunissent une connaissance fine des marchés africains et une exigence méthodologique de premier plan."}
                        </p>
                    </Reveal>
                    <Reveal>
                        <p>
                            {"Chaque mission est conduite avec une équipe resserrée, au plus près des décideurs."}
                        </p>
                    </Reveal>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container contact-grid">
                    <Reveal class={classes!("contact-intro")}>
                        <h2>{"Parlons de votre projet"}</h2>
                        <p>{"Décrivez-nous votre besoin, nous revenons vers vous sous 24h."}</p>
                    </Reveal>
                    <Reveal>
                        <ContactForm on_toast={props.on_toast.clone()} />
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{format!("© {}", BRAND)}</p>
                </div>
            </footer>
        </main>
    }
}
