use yew::prelude::*;

use crate::models::{ClientCaseStudy, Metric};

/// Rendering shape of a single case study card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView<'a> {
    pub key: String,
    pub title: &'a str,
    pub period: &'a str,
    pub description: &'a str,
    pub tiles: &'a [Metric],
    pub testimonial: Option<(&'a str, Option<&'a str>)>,
    pub delay_ms: usize,
}

/// One card per case study, in the order the backend returned them.
pub fn card_views(clients: &[ClientCaseStudy]) -> Vec<CardView<'_>> {
    clients
        .iter()
        .enumerate()
        .map(|(index, client)| CardView {
            key: client.id.to_string(),
            title: &client.display_name,
            period: &client.period,
            description: &client.description,
            tiles: &client.metrics,
            testimonial: client
                .testimonial
                .as_deref()
                .filter(|text| !text.is_empty())
                .map(|text| (text, client.testimonial_author.as_deref())),
            delay_ms: index * 100,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ClientsProps {
    pub clients: Vec<ClientCaseStudy>,
}

#[function_component(ClientsSection)]
pub fn clients_section(props: &ClientsProps) -> Html {
    html! {
        <section id="clients" class="clients-section">
            <style>
                {r#"
                    .clients-section { padding: 5rem 1.5rem; background: #111827; }
                    .clients-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; }
                    .client-card { background: #1f2937; border-radius: 0.5rem; padding: 2rem; transition: background 0.3s; }
                    .client-card:hover { background: #374151; }
                    .client-card h3 { font-size: 1.5rem; font-weight: 700; color: #fff; }
                    .client-period { color: #60a5fa; }
                    .client-description { color: #d1d5db; margin: 1.5rem 0; }
                    .metric-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
                    .metric-tile { background: #374151; padding: 1rem; border-radius: 0.5rem; }
                    .metric-value { font-size: 1.5rem; font-weight: 700; color: #60a5fa; }
                    .metric-name { font-size: 0.875rem; color: #9ca3af; }
                    .metric-description { font-size: 0.75rem; color: #6b7280; margin-top: 0.25rem; }
                    .client-testimonial { background: #374151; padding: 1.5rem; border-radius: 0.5rem; border-left: 4px solid #60a5fa; }
                    .client-testimonial p { color: #d1d5db; font-style: italic; }
                    .client-testimonial span { color: #60a5fa; font-weight: 600; }
                    .showcase-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; margin-top: 3rem; }
                    .showcase-item { background: #1f2937; border-radius: 0.5rem; padding: 1.5rem; }
                    @media (max-width: 1024px) {
                        .clients-grid, .showcase-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading" data-aos="fade-up">
                <h2>{"Our Success Stories"}</h2>
                <p>{"Real results from real businesses"}</p>
            </div>
            <div class="clients-grid">
                { for card_views(&props.clients).into_iter().map(render_card) }
            </div>
            <div class="past-showcase" data-aos="fade-up">
                <h3 class="showcase-title">{"Past Projects Showcase"}</h3>
                <div class="showcase-grid">
                    { for PAST_WORK.iter().map(|(name, kpi, summary)| html! {
                        <div class="showcase-item" key={*name}>
                            <h4>{ *name }</h4>
                            <p><strong>{"KPI: "}</strong>{ *kpi }</p>
                            <p class="metric-description">{ *summary }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const PAST_WORK: &[(&str, &str, &str)] = &[
    (
        "BTrave Holiday",
        "Promote travel packages through engaging video content.",
        "Created compelling video content that increased engagement and booking inquiries for travel packages.",
    ),
    (
        "Inbranded",
        "Create captions and promotional videos to boost brand visibility.",
        "Developed strategic caption writing and video content that enhanced brand recognition and audience engagement.",
    ),
];

fn render_card(card: CardView<'_>) -> Html {
    html! {
        <div
            class="client-card"
            key={card.key.clone()}
            data-aos="fade-up"
            style={format!("transition-delay: {}ms;", card.delay_ms)}
        >
            <h3>{ card.title }</h3>
            <p class="client-period">{ card.period }</p>
            <p class="client-description">{ card.description }</p>
            <div class="metric-grid">
                { for card.tiles.iter().enumerate().map(|(i, metric)| html! {
                    <div class="metric-tile" key={i}>
                        <div class="metric-value">{ &metric.value }</div>
                        <div class="metric-name">{ &metric.metric_name }</div>
                        if let Some(description) = &metric.description {
                            <div class="metric-description">{ description }</div>
                        }
                    </div>
                }) }
            </div>
            if let Some((text, author)) = card.testimonial {
                <div class="client-testimonial">
                    <p>{ format!("\"{}\"", text) }</p>
                    if let Some(author) = author {
                        <span>{ format!("- {}", author) }</span>
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientId;
    use crate::test_support::{acme, render};

    fn client(id: &str, name: &str) -> ClientCaseStudy {
        ClientCaseStudy {
            id: ClientId::Text(id.to_string()),
            display_name: name.to_string(),
            ..acme()
        }
    }

    #[test]
    fn empty_list_renders_no_cards() {
        assert!(card_views(&[]).is_empty());
    }

    #[test]
    fn one_card_per_client_in_input_order() {
        let clients = vec![
            client("c", "Zeta Foods"),
            client("a", "Alpha Homes"),
            client("b", "Mid Media"),
        ];

        let cards = card_views(&clients);

        assert_eq!(
            cards.iter().map(|c| c.title).collect::<Vec<_>>(),
            vec!["Zeta Foods", "Alpha Homes", "Mid Media"]
        );
        assert_eq!(
            cards.iter().map(|c| c.key.as_str()).collect::<Vec<_>>(),
            vec!["c", "a", "b"]
        );
        assert_eq!(
            cards.iter().map(|c| c.delay_ms).collect::<Vec<_>>(),
            vec![0, 100, 200]
        );
    }

    #[test]
    fn acme_card_has_one_reach_tile() {
        let clients = vec![acme()];
        let cards = card_views(&clients);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Acme");
        assert_eq!(cards[0].period, "Q1");
        assert_eq!(cards[0].tiles.len(), 1);
        assert_eq!(cards[0].tiles[0].value, "4.4k");
        assert_eq!(cards[0].tiles[0].metric_name, "Reach");
        assert_eq!(cards[0].testimonial, None);
    }

    #[test]
    fn metrics_keep_received_order() {
        let mut study = acme();
        study.metrics = ["Posts", "Followers", "Total Views"]
            .iter()
            .map(|name| Metric {
                metric_name: name.to_string(),
                value: "1".to_string(),
                description: None,
            })
            .collect();
        let clients = vec![study];

        let cards = card_views(&clients);
        let names: Vec<_> = cards[0].tiles.iter().map(|m| m.metric_name.as_str()).collect();
        assert_eq!(names, vec!["Posts", "Followers", "Total Views"]);
    }

    #[test]
    fn testimonial_shown_only_when_present() {
        let mut study = acme();
        study.testimonial = Some("From 0 to 10k reach!".to_string());
        study.testimonial_author = Some("Bosah Oak Roe".to_string());
        let mut blank = acme();
        blank.testimonial = Some(String::new());
        let clients = vec![study, blank];

        let cards = card_views(&clients);

        assert_eq!(
            cards[0].testimonial,
            Some(("From 0 to 10k reach!", Some("Bosah Oak Roe")))
        );
        assert_eq!(cards[1].testimonial, None);
    }

    #[test]
    fn section_without_clients_has_no_cards() {
        let html = render::<ClientsSection>(ClientsProps { clients: vec![] });
        assert_eq!(html.matches(r#"class="client-card""#).count(), 0);
        assert!(html.contains("Our Success Stories"));
    }

    #[test]
    fn section_renders_the_acme_card() {
        let html = render::<ClientsSection>(ClientsProps {
            clients: vec![acme()],
        });
        assert_eq!(html.matches(r#"class="client-card""#).count(), 1);
        assert!(html.contains("Acme"));
        assert!(html.contains("4.4k"));
        assert!(html.contains("Reach"));
    }
}
