use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// `HH:MM:SS ZONE` in the given timezone, e.g. `13:00:00 BST`.
pub fn format_clock(now: DateTime<Utc>, timezone: Tz) -> String {
    now.with_timezone(&timezone).format("%H:%M:%S %Z").to_string()
}

#[derive(Properties, PartialEq)]
pub struct LiveClockProps {
    pub timezone: Tz,
}

#[function_component(LiveClock)]
pub fn live_clock(props: &LiveClockProps) -> Html {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1000, move || now.set(Utc::now()));
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <time class="live-clock" datetime={now.to_rfc3339()}>
            { format_clock(*now, props.timezone) }
        </time>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn winter_time_is_gmt() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_clock(now, chrono_tz::Europe::London), "12:00:00 GMT");
    }

    #[test]
    fn summer_time_is_bst() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 30, 5).unwrap();
        assert_eq!(format_clock(now, chrono_tz::Europe::London), "13:30:05 BST");
    }
}
