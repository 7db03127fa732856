//! impact classes for wheelchair users (UFR).
use super::{ImpactClass, ProfileImpact};
use crate::model::category::{Highway, Smoothness, Surface};
use crate::model::tag::Incline;

pub const UFR_IMPACT: ProfileImpact = ProfileImpact {
    width,
    surface,
    smoothness,
    highway,
    incline,
    ressaut_max,
    ..ProfileImpact::NO_IMPACT
};

fn width(meters: f64) -> ImpactClass {
    if meters < 0.8 {
        ImpactClass::Severe
    } else if meters < 0.9 {
        ImpactClass::High
    } else if meters < 1.2 {
        ImpactClass::Moderate
    } else if meters < 1.4 {
        ImpactClass::Low
    } else {
        ImpactClass::NoImpact
    }
}

fn surface(surface: Surface) -> ImpactClass {
    use Surface as S;
    match surface {
        S::Paved
        | S::Asphalt
        | S::Chipseal
        | S::Concrete
        | S::Metal
        | S::Rubber
        | S::Clay
        | S::Tartan
        | S::Acrylic
        | S::Carpet => ImpactClass::NoImpact,
        S::ConcretePlates
        | S::PavingStones
        | S::Wood
        | S::Unpaved
        | S::Compacted
        | S::FineGravel
        | S::ArtificialTurf => ImpactClass::Low,
        S::Sett | S::MetalGrid => ImpactClass::Moderate,
        S::Cobblestone
        | S::UnhewnCobblestone
        | S::Pebblestone
        | S::Ground
        | S::Dirt
        | S::Earth
        | S::Grass
        | S::GrassPaver => ImpactClass::High,
        S::ConcreteLanes
        | S::SteppingStones
        | S::Gravel
        | S::Rock
        | S::Mud
        | S::Sand
        | S::Woodchips
        | S::Snow
        | S::Ice => ImpactClass::Severe,
    }
}

fn smoothness(smoothness: Smoothness) -> ImpactClass {
    match smoothness {
        Smoothness::Excellent | Smoothness::Good => ImpactClass::NoImpact,
        Smoothness::Intermediate => ImpactClass::High,
        Smoothness::Bad
        | Smoothness::VeryBad
        | Smoothness::Horrible
        | Smoothness::VeryHorrible
        | Smoothness::Impassable => ImpactClass::Severe,
    }
}

fn highway(highway: Highway) -> ImpactClass {
    match highway {
        Highway::Steps => ImpactClass::Severe,
        _ => ImpactClass::NoImpact,
    }
}

fn incline(incline: Incline) -> ImpactClass {
    let Some(percent) = incline.percent() else {
        return ImpactClass::NoImpact;
    };
    let slope = percent.abs();
    if slope <= 4.0 {
        ImpactClass::NoImpact
    } else if slope <= 5.0 {
        ImpactClass::Low
    } else if slope <= 6.0 {
        ImpactClass::Moderate
    } else if slope <= 7.0 {
        ImpactClass::High
    } else {
        ImpactClass::Severe
    }
}

fn ressaut_max(height: f64) -> ImpactClass {
    if height <= 0.02 {
        ImpactClass::NoImpact
    } else if height <= 0.04 {
        ImpactClass::Low
    } else if height <= 0.06 {
        ImpactClass::Moderate
    } else if height <= 0.12 {
        ImpactClass::High
    } else {
        ImpactClass::Severe
    }
}

#[cfg(test)]
mod tests {
    use super::UFR_IMPACT;
    use crate::model::category::{Category, Highway, InclineDirection, Smoothness, Surface};
    use crate::model::property::PropertyValue;
    use crate::model::tag::Incline;

    fn classes(values: impl IntoIterator<Item = PropertyValue>) -> Vec<u8> {
        values
            .into_iter()
            .map(|v| UFR_IMPACT.classify(v).value())
            .collect()
    }

    #[test]
    fn width_breakpoints() {
        let widths = [0.5, 0.79, 0.8, 0.89, 0.9, 1.19, 1.2, 1.39, 1.4, 100.0];
        assert_eq!(
            classes(widths.map(PropertyValue::Width)),
            vec![5, 5, 4, 4, 3, 3, 2, 2, 1, 1]
        );
    }

    #[test]
    fn incline_breakpoints() {
        let slopes = [0.0, 4.0, 4.01, 5.0, 5.01, 6.0, 6.01, 7.0, 7.01];
        let expected = vec![1, 1, 2, 2, 3, 3, 4, 4, 5];
        let up = slopes.map(|p| PropertyValue::Incline(Incline::Percent(p)));
        let down = slopes.map(|p| PropertyValue::Incline(Incline::Percent(-p)));
        assert_eq!(classes(up), expected);
        assert_eq!(classes(down), expected);
    }

    #[test]
    fn incline_keyword_has_no_impact() {
        let keywords = [InclineDirection::Up, InclineDirection::Down]
            .map(|d| PropertyValue::Incline(Incline::Direction(d)));
        assert_eq!(classes(keywords), vec![1, 1]);
    }

    #[test]
    fn every_surface() {
        let expected = vec![
            1, 1, 1, 1, 5, 2, 1, 2, 3, 4, 4, 2, 5, 1, 2, 2, 2, 5, 5, 4, 4, 4, 4, 4, 4, 3, 5, 5,
            5, 5, 5, 1, 1, 2, 1, 1,
        ];
        assert_eq!(Surface::ALL.len(), expected.len());
        assert_eq!(
            classes(Surface::ALL.iter().copied().map(PropertyValue::Surface)),
            expected
        );
    }

    #[test]
    fn every_smoothness() {
        assert_eq!(
            classes(Smoothness::ALL.iter().copied().map(PropertyValue::Smoothness)),
            vec![1, 1, 4, 5, 5, 5, 5, 5]
        );
    }

    #[test]
    fn only_steps_are_relucted() {
        assert_eq!(
            classes(Highway::ALL.iter().copied().map(PropertyValue::Highway)),
            vec![1, 1, 1, 5, 1, 1, 1]
        );
    }

    #[test]
    fn ressaut_breakpoints() {
        let heights = [0.0, 0.02, 0.021, 0.04, 0.041, 0.06, 0.061, 0.12, 0.121];
        assert_eq!(
            classes(heights.map(PropertyValue::RessautMax)),
            vec![1, 1, 2, 2, 3, 3, 4, 4, 5]
        );
    }
}
