use yew::prelude::*;

use crate::models::PortfolioStats;

#[derive(Clone, Debug, PartialEq)]
pub struct StatTile {
    pub value: String,
    pub label: &'static str,
    pub accent: &'static str,
}

/// One tile per field the backend actually sent, in display order.
pub fn stat_tiles(stats: &PortfolioStats) -> Vec<StatTile> {
    let mut tiles = Vec::with_capacity(4);
    if let Some(total) = stats.total_clients {
        tiles.push(StatTile {
            value: format!("{}+", total),
            label: "Happy Clients",
            accent: "#60a5fa",
        });
    }
    if let Some(reach) = &stats.total_reach {
        tiles.push(StatTile {
            value: reach.clone(),
            label: "Total Reach",
            accent: "#4ade80",
        });
    }
    if let Some(rate) = &stats.success_rate {
        tiles.push(StatTile {
            value: rate.clone(),
            label: "Success Rate",
            accent: "#c084fc",
        });
    }
    if let Some(years) = stats.experience_years {
        tiles.push(StatTile {
            value: format!("{}+", years),
            label: "Years Experience",
            accent: "#f472b6",
        });
    }
    tiles
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub stats: Option<PortfolioStats>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative; min-height: 100vh; display: flex; align-items: center;
                        justify-content: center; overflow: hidden; text-align: center; padding: 0 1.5rem;
                        background: linear-gradient(135deg, #1e3a8a, #581c87, #111827);
                    }
                    .hero h1 { font-size: 3.5rem; font-weight: 700; color: #fff; margin-bottom: 1.5rem; }
                    .hero h1 span {
                        background: linear-gradient(to right, #60a5fa, #c084fc);
                        -webkit-background-clip: text; -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle { font-size: 1.5rem; color: #d1d5db; max-width: 48rem; margin: 0 auto 2rem; }
                    .hero-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-bottom: 2rem; }
                    .hero-stat-value { font-size: 1.875rem; font-weight: 700; }
                    .hero-stat-label { font-size: 0.875rem; color: #9ca3af; }
                    .hero-actions { display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; }
                    .hero-primary {
                        padding: 1rem 2rem; border-radius: 0.5rem; color: #fff; font-weight: 600; text-decoration: none;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                    }
                    .hero-secondary {
                        padding: 1rem 2rem; border-radius: 0.5rem; color: #60a5fa; font-weight: 600; text-decoration: none;
                        border: 2px solid #60a5fa;
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.5rem; }
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="hero-content" data-aos="fade-up">
                <h1>
                    {"Increase Your "}
                    <span>{"Social Media Reach"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Helping businesses grow their online presence with proven strategies and data-driven results."}
                </p>
                if let Some(stats) = &props.stats {
                    <div class="hero-stats">
                        { for stat_tiles(stats).into_iter().map(|tile| html! {
                            <div class="hero-stat" key={tile.label}>
                                <div class="hero-stat-value" style={format!("color: {};", tile.accent)}>
                                    { tile.value }
                                </div>
                                <div class="hero-stat-label">{ tile.label }</div>
                            </div>
                        }) }
                    </div>
                }
                <div class="hero-actions">
                    <a href="#clients" class="hero-primary">{"View Our Work"}</a>
                    <a href="#contact" class="hero-secondary">{"Get Started"}</a>
                </div>
            </div>
        </section>
    }
}
