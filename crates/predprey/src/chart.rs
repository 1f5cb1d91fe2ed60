//! Chart descriptions of a simulated run.

use predprey_plot::{Figure, Trace};

use crate::{i18n::Strings, series::TimeSeries, theme::Palette};

/// Prey and predator populations against time, on one set of axes.
#[must_use]
pub fn populations_over_time(series: &TimeSeries, strings: &Strings, palette: &Palette) -> Figure {
    let prey = series.iter().map(|r| [r.time, r.prey]);
    let predator = series.iter().map(|r| [r.time, r.predator]);

    Figure::new(strings.populations_over_time)
        .x_label(strings.time)
        .y_label(strings.population)
        .trace(Trace::new(palette.prey, prey).named(strings.prey))
        .trace(Trace::new(palette.predator, predator).named(strings.predator))
}

/// Predators against prey: the trajectory through the phase plane.
#[must_use]
pub fn phase_portrait(series: &TimeSeries, strings: &Strings, palette: &Palette) -> Figure {
    Figure::new(strings.phase_portrait)
        .x_label(strings.prey)
        .y_label(strings.predator)
        .trace(Trace::new(palette.prey, series.phase()))
}

/// Both charts, in display order.
#[must_use]
pub fn charts(series: &TimeSeries, strings: &Strings, palette: &Palette) -> [Figure; 2] {
    [
        populations_over_time(series, strings, palette),
        phase_portrait(series, strings, palette),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{i18n::Language, series::Record, theme::Theme};

    fn series() -> TimeSeries {
        TimeSeries::from_records(vec![
            Record {
                time: 0.0,
                prey: 40.0,
                predator: 9.0,
            },
            Record {
                time: 0.5,
                prey: 38.4,
                predator: 10.35,
            },
        ])
    }

    #[test]
    fn time_chart_has_one_trace_per_species() {
        let palette = Theme::Dark.palette();
        let figure = populations_over_time(&series(), Language::En.strings(), &palette);

        assert_eq!(figure.title(), "Populations over time");
        assert_eq!(figure.x_axis(), "Time");
        assert_eq!(figure.y_axis(), "Population");

        let [prey, predator] = figure.traces() else {
            panic!("expected two traces");
        };
        assert_eq!(prey.name(), Some("Prey"));
        assert_eq!(prey.color(), palette.prey);
        assert_eq!(prey.points(), [[0.0, 40.0], [0.5, 38.4]]);
        assert_eq!(predator.name(), Some("Predators"));
        assert_eq!(predator.color(), palette.predator);
        assert_eq!(predator.points(), [[0.0, 9.0], [0.5, 10.35]]);
    }

    #[test]
    fn phase_chart_plots_predator_against_prey() {
        let palette = Theme::Light.palette();
        let figure = phase_portrait(&series(), Language::Ru.strings(), &palette);

        assert_eq!(figure.title(), "Фазовый портрет");
        assert_eq!(figure.x_axis(), "Жертвы");
        assert_eq!(figure.y_axis(), "Хищники");
        assert_eq!(figure.traces().len(), 1);

        let trajectory = &figure.traces()[0];
        assert_eq!(trajectory.name(), None);
        assert_eq!(trajectory.color(), palette.prey);
        assert_eq!(trajectory.points(), [[40.0, 9.0], [38.4, 10.35]]);
    }

    #[test]
    fn charts_come_in_display_order() {
        let strings = Language::Kk.strings();
        let [first, second] = charts(&series(), strings, &Theme::Light.palette());

        assert_eq!(first.title(), strings.populations_over_time);
        assert_eq!(second.title(), strings.phase_portrait);
    }
}
