use shared::{group_concerts, Concert, DateFormatter, DateGroup, NeighborhoodGroup};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConcertListProps {
    pub concerts: Vec<Concert>,
    pub formatter: DateFormatter,
}

/// Date sections for the current results, rebuilt from scratch each time.
#[function_component(ConcertList)]
pub fn concert_list(props: &ConcertListProps) -> Html {
    let groups = use_memo(props.concerts.clone(), |concerts| group_concerts(concerts));

    if groups.is_empty() {
        return html! {
            <p class="no-results">{"No concerts match these filters."}</p>
        };
    }

    html! {
        <>
            {for groups.iter().map(|group| html! {
                <DateSection key={group.date.clone()} group={group.clone()} formatter={props.formatter} />
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
struct DateSectionProps {
    group: DateGroup,
    formatter: DateFormatter,
}

#[function_component(DateSection)]
fn date_section(props: &DateSectionProps) -> Html {
    let group = &props.group;
    html! {
        <section class="date-section" data-date={group.date.clone()}>
            <h2 class="date-header">{props.formatter.label_for(&group.date)}</h2>
            {for group.neighborhoods.iter().map(|n| html! {
                <NeighborhoodBlock key={n.neighborhood.clone()} group={n.clone()} />
            })}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct NeighborhoodBlockProps {
    group: NeighborhoodGroup,
}

#[function_component(NeighborhoodBlock)]
fn neighborhood_block(props: &NeighborhoodBlockProps) -> Html {
    html! {
        <div class="neighborhood-group">
            <h3 class="neighborhood-name">{&props.group.neighborhood}</h3>
            <ul class="concert-list">
                {for props.group.concerts.iter().map(concert_card)}
            </ul>
        </div>
    }
}

fn concert_card(concert: &Concert) -> Html {
    html! {
        <li class="concert-card">
            <div class="concert-artists">{concert.headline()}</div>
            if let Some(venue) = &concert.venue {
                <div class="concert-venue">{venue}</div>
            }
            if !concert.times.is_empty() {
                <div class="concert-times">{concert.times.join(" / ")}</div>
            }
            if let Some(price) = &concert.price_range {
                <div class="concert-price">{price}</div>
            }
            if let Some(notes) = &concert.special_notes {
                <div class="concert-notes">{notes}</div>
            }
            if let Some(link) = &concert.ticket_link {
                <a class="concert-tickets" href={link.clone()} target="_blank" rel="noopener">{"Tickets"}</a>
            }
        </li>
    }
}
