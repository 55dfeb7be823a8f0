use yew::prelude::*;

use crate::components::clients::ClientsSection;
use crate::components::contact::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::project_video::{ProjectVideo, VideoSource};
use crate::components::scroller::{Scroller, ScrollerItem};
use crate::loader::use_portfolio_data;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "Data-Driven Strategies",
        "We use analytics to optimize your social media campaigns and maximize ROI.",
        "#60a5fa",
    ),
    (
        "Audience Engagement",
        "Boost interaction and build a loyal community around your brand.",
        "#4ade80",
    ),
    (
        "Rapid Growth",
        "See measurable results in as little as 2 months with our proven methods.",
        "#c084fc",
    ),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "Tomiwa helped us increase our reach from 77 to 4.4k in just 2 months!",
        "CoreMars Team",
    ),
    (
        "Our social media presence went from 0 to 10k reach. Highly recommended!",
        "Bosah Oak Roe",
    ),
];

fn scroller_items() -> Vec<ScrollerItem> {
    vec![
        ScrollerItem {
            src: "/coremars page.jpg",
            alt: "CoreMars page",
            caption: "CoreMars - Social Media Growth",
        },
        ScrollerItem {
            src: "/coremars analysis.jpg",
            alt: "CoreMars Screenshot 2",
            caption: "CoreMars - Engagement Boost",
        },
        ScrollerItem {
            src: "/bosah page.jpg",
            alt: "Bosah Oak Roe Screenshot 1",
            caption: "Bosah Oak Roe - Follower Growth",
        },
        ScrollerItem {
            src: "/bosah analysis .jpg",
            alt: "Bosah Oak Roe Screenshot 2",
            caption: "Bosah Oak Roe - Campaign Success",
        },
    ]
}

struct PastProject {
    name: &'static str,
    kpi: &'static str,
    videos: [VideoSource; 2],
}

const fn clip(alt: &'static str, mp4: &'static str, webm: &'static str, fallback: &'static str) -> VideoSource {
    VideoSource {
        mp4,
        webm,
        fallback,
        alt,
    }
}

const PAST_PROJECTS: &[PastProject] = &[
    PastProject {
        name: "BTrave Holiday",
        kpi: "Promote travel packages through engaging video content.",
        videos: [
            clip("Fifa1 Fallback", "/fifa1.mp4", "/fifa1.webm", "/fifa1-fallback.jpg"),
            clip("Fifa2 Fallback", "/fifa2.mp4", "/fifa2.webm", "/fifa2-fallback.jpg"),
        ],
    },
    PastProject {
        name: "Inbranded",
        kpi: "Create captions and promotional videos to boost brand visibility.",
        videos: [
            clip("Inb1 Fallback", "/inb1.mp4", "/inb1.webm", "/inb1-fallback.jpg"),
            clip("Inb2 Fallback", "/inb2.mp4", "/inb2.webm", "/inb2-fallback.jpg"),
        ],
    },
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let data = use_portfolio_data();

    if data.loading {
        return html! {
            <div class="loading-screen" style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #111827;">
                <div style="color: white; font-size: 1.25rem;">{"Loading portfolio..."}</div>
            </div>
        };
    }

    html! {
        <div class="portfolio">
            <style>
                {r#"
                    .portfolio { background: #111827; min-height: 100vh; color: #fff; }
                    .section-heading { text-align: center; margin-bottom: 4rem; }
                    .section-heading h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
                    .section-heading p { font-size: 1.25rem; color: #d1d5db; }
                    .features { padding: 5rem 1.5rem; background: #1f2937; }
                    .features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .feature-item { background: #374151; padding: 2rem; border-radius: 0.5rem; text-align: center; }
                    .feature-item h3 { font-size: 1.5rem; margin-bottom: 1rem; }
                    .feature-item p, .testimonial p { color: #d1d5db; }
                    .testimonials { padding: 4rem 1.5rem; background: #1f2937; text-align: center; }
                    .testimonial-row { display: flex; justify-content: space-around; gap: 1.5rem; }
                    .testimonial p { font-style: italic; }
                    .testimonial span { display: block; margin-top: 0.5rem; font-weight: 600; }
                    .work, .past-projects { padding: 4rem 1.5rem; text-align: center; }
                    .past-projects { background: #1f2937; }
                    .projects-row { display: flex; justify-content: space-around; gap: 2rem; }
                    .video-wrapper { display: flex; gap: 1rem; justify-content: center; }
                    .project-media { width: 16rem; height: 9rem; object-fit: cover; border-radius: 0.5rem; }
                    .site-footer { padding: 3rem 1.5rem; }
                    .footer-row { display: flex; justify-content: space-between; align-items: center; }
                    .footer-links a { color: #9ca3af; margin-left: 1.5rem; text-decoration: none; }
                    .footer-links a:hover { color: #60a5fa; }
                    .footer-legal { border-top: 1px solid #1f2937; margin-top: 2rem; padding-top: 2rem; text-align: center; color: #9ca3af; }
                    @media (max-width: 768px) {
                        .features-grid { grid-template-columns: 1fr; }
                        .testimonial-row, .projects-row, .footer-row { flex-direction: column; }
                    }
                "#}
            </style>
            <HeroSection stats={data.stats.clone()} />

            <section class="features">
                <div class="section-heading" data-aos="fade-up">
                    <h2>{"Why Choose Our Services?"}</h2>
                    <p>{"Proven strategies that deliver real results"}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (title, body, accent))| html! {
                        <div
                            class="feature-item"
                            key={*title}
                            data-aos="fade-up"
                            style={format!("transition-delay: {}ms; border-top: 3px solid {};", (i + 1) * 100, accent)}
                        >
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <div data-aos="fade-up">
                    <h2>{"What Our Clients Say"}</h2>
                    <div class="testimonial-row">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <div class="testimonial" key={*author}>
                                <p>{ format!("\"{}\"", quote) }</p>
                                <span>{ format!("- {}", author) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="work">
                <div data-aos="fade-up">
                    <h2>{"Our Work"}</h2>
                    <Scroller items={scroller_items()} />
                </div>
            </section>

            <section class="past-projects">
                <div data-aos="fade-up">
                    <h2>{"Past Projects"}</h2>
                    <div class="projects-row">
                        { for PAST_PROJECTS.iter().map(|project| html! {
                            <div class="project-item" key={project.name}>
                                <h3>{ project.name }</h3>
                                <p><strong>{"KPI: "}</strong>{ project.kpi }</p>
                                <div class="video-wrapper">
                                    { for project.videos.iter().map(|source| html! {
                                        <ProjectVideo key={source.mp4} source={source.clone()} />
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <ClientsSection clients={data.clients.clone()} />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-row">
                <div>
                    <h3>{"Tomiwa Babatunde"}</h3>
                    <p style="color: #9ca3af;">{"Social Media Marketing Expert"}</p>
                </div>
                <div class="footer-links">
                    <a href="#" aria-label="Twitter">{"Twitter"}</a>
                    <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                    <a href="#" aria-label="Instagram">{"Instagram"}</a>
                </div>
            </div>
            <div class="footer-legal">
                <p>{"© 2025 Tomiwa Babatunde. All rights reserved."}</p>
            </div>
        </footer>
    }
}
