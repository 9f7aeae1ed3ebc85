use contracts::domain::a002_score_graph::aggregate::GraphPayload;
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 800.0;
const VIEW_HEIGHT: f64 = 300.0;

const SERIES_COLORS: [&str; 10] = [
    "#f44d8a", "#daa42e", "#6facc3", "#ac593a", "#80728f", "#7fc97f", "#f0027f", "#bf5b17",
    "#386cb0", "#ffff99",
];

/// Polyline of one team, already in view-box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub name: String,
    pub points: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphGeometry {
    pub series: Vec<SeriesPath>,
    pub time_range: Option<(i64, i64)>,
    pub max_score: i64,
}

/// Scale all series into a `width` x `height` box. Empty or flat payloads stay renderable.
pub fn graph_geometry(payload: &GraphPayload, width: f64, height: f64) -> GraphGeometry {
    let mut all_points = payload.graph.iter().flat_map(|s| s.points.iter());
    let Some(first) = all_points.next() else {
        return GraphGeometry {
            series: Vec::new(),
            time_range: None,
            max_score: 0,
        };
    };

    let (mut t_min, mut t_max, mut max_score) = (first.time, first.time, first.score.max(0));
    for p in all_points {
        t_min = t_min.min(p.time);
        t_max = t_max.max(p.time);
        max_score = max_score.max(p.score);
    }

    let t_span = (t_max - t_min) as f64;
    let x = |time: i64| {
        if t_span > 0.0 {
            (time - t_min) as f64 / t_span * width
        } else {
            0.0
        }
    };
    let y = |score: i64| {
        if max_score > 0 {
            height - score.max(0) as f64 / max_score as f64 * height
        } else {
            height
        }
    };

    let series = payload
        .graph
        .iter()
        .filter(|s| !s.points.is_empty())
        .enumerate()
        .map(|(i, s)| {
            let mut points: Vec<_> = s.points.clone();
            points.sort_by_key(|p| p.time);
            SeriesPath {
                name: s.name.clone(),
                points: points
                    .iter()
                    .map(|p| format!("{:.1},{:.1}", x(p.time), y(p.score)))
                    .collect::<Vec<_>>()
                    .join(" "),
                color: SERIES_COLORS[i % SERIES_COLORS.len()],
            }
        })
        .collect();

    GraphGeometry {
        series,
        time_range: Some((t_min, t_max)),
        max_score,
    }
}

fn format_time(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%b %d %H:%M UTC").to_string())
        .unwrap_or_default()
}

/// Линейный график очков лидеров
#[component]
pub fn ScoreGraph(#[prop(into)] graph: Signal<Option<GraphPayload>>) -> impl IntoView {
    let geometry = Memo::new(move |_| {
        graph.with(|g| g.as_ref().map(|g| graph_geometry(g, VIEW_WIDTH, VIEW_HEIGHT)))
    });

    view! {
        <div class="score-graph">
            {move || match geometry.get() {
                Some(geometry) if !geometry.series.is_empty() => {
                    let (t_min, t_max) = geometry.time_range.unwrap_or_default();
                    let legend = geometry.series.clone();
                    view! {
                        <svg
                            class="score-graph__chart"
                            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                            preserveAspectRatio="none"
                        >
                            {geometry.series.into_iter().map(|s| view! {
                                <polyline
                                    points=s.points
                                    fill="none"
                                    stroke=s.color
                                    stroke-width="2"
                                />
                            }).collect_view()}
                        </svg>
                        <div class="score-graph__axis">
                            <span>{format_time(t_min)}</span>
                            <span>{format!("max {} pts", geometry.max_score)}</span>
                            <span>{format_time(t_max)}</span>
                        </div>
                        <ul class="score-graph__legend">
                            {legend.into_iter().map(|s| view! {
                                <li>
                                    <span class="score-graph__swatch" style=format!("background: {}", s.color)></span>
                                    {s.name}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
                _ => view! { <div class="score-graph__empty">"No solves yet"</div> }.into_any(),
            }}
        </div>
    }
}
