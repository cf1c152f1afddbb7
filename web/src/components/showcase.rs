use leptos::prelude::*;

/// A titled image card, used by the curated experiences grid and the
/// featured community gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
}

pub const CURATED_EXPERIENCES: &[ShowcaseCard] = &[
    ShowcaseCard {
        title: "Runway Talent Curation",
        subtitle: "Precision casting for fashion-forward brands.",
        caption: "",
        image: "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=600&h=750&fit=crop",
    },
    ShowcaseCard {
        title: "Rising Voices Platform",
        subtitle: "Where emerging artists rise.",
        caption: "",
        image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=600&h=750&fit=crop",
    },
    ShowcaseCard {
        title: "Signature Live Experiences",
        subtitle: "Curated moments. Elevated impact.",
        caption: "",
        image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=600&h=750&fit=crop",
    },
    ShowcaseCard {
        title: "Brand Connect Studio",
        subtitle: "Strategic collaborations that matter.",
        caption: "",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=600&h=750&fit=crop",
    },
    ShowcaseCard {
        title: "Talent Scouting & Discovery",
        subtitle: "Unearthing the next generation of sound.",
        caption: "",
        image: "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=600&h=750&fit=crop",
    },
    ShowcaseCard {
        title: "Creative Experience Management",
        subtitle: "Designing experiences that leave a mark.",
        caption: "",
        image: "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=600&h=750&fit=crop",
    },
];

pub const FEATURED_MEMBERS: &[ShowcaseCard] = &[
    ShowcaseCard {
        title: "Sophie Miller",
        subtitle: "Fashion Enthusiast",
        caption: "NYC Based | Style Blogger",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300&h=300&fit=crop",
    },
    ShowcaseCard {
        title: "Alex Chen",
        subtitle: "Event Volunteer",
        caption: "Los Angeles | Event Organizer",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
    },
    ShowcaseCard {
        title: "Maya Patel",
        subtitle: "Content Creator",
        caption: "London | Fashion Blogger",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop",
    },
    ShowcaseCard {
        title: "Jordan Davis",
        subtitle: "Community Moderator",
        caption: "Miami | Style Consultant",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=300&h=300&fit=crop",
    },
    ShowcaseCard {
        title: "Lisa Anderson",
        subtitle: "Content Support",
        caption: "Chicago | Content Creator",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=300&h=300&fit=crop",
    },
    ShowcaseCard {
        title: "Marcus Johnson",
        subtitle: "Brand Ambassador",
        caption: "Atlanta | Fashion Influencer",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
    },
];

#[component]
pub fn ShowcaseGrid(
    heading: &'static str,
    #[prop(optional)] intro: &'static str,
    cards: &'static [ShowcaseCard],
) -> impl IntoView {
    view! {
        <section class="showcase">
            <h2 class="showcase__heading">{heading}</h2>
            {(!intro.is_empty()).then(|| view! { <p class="showcase__intro">{intro}</p> })}
            <div class="showcase__grid">
                {cards
                    .iter()
                    .map(|card| view! {
                        <div class="showcase__card">
                            <div class="showcase__image">
                                <img src=card.image alt=card.title loading="lazy"/>
                            </div>
                            <div class="showcase__content">
                                <h3>{card.title}</h3>
                                <p class="showcase__subtitle">{card.subtitle}</p>
                                {(!card.caption.is_empty()).then(|| view! {
                                    <p class="showcase__caption">{card.caption}</p>
                                })}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
