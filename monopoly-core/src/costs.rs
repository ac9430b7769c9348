//! Property cost reference.
//!
//! Static title-deed values for every purchasable square, in board order.
//! Nothing here is computed from game state.

use std::fmt;

/// Street color groups and what a house costs in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Brown,
    Blue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Indigo,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::Blue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::Indigo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorGroup::Brown => "Brown",
            ColorGroup::Blue => "Blue",
            ColorGroup::Pink => "Pink",
            ColorGroup::Orange => "Orange",
            ColorGroup::Red => "Red",
            ColorGroup::Yellow => "Yellow",
            ColorGroup::Green => "Green",
            ColorGroup::Indigo => "Indigo",
        }
    }

    /// Price of one house (or the hotel upgrade) on a street in this group.
    pub fn building_price(&self) -> u32 {
        match self {
            ColorGroup::Brown | ColorGroup::Blue => 50,
            ColorGroup::Pink | ColorGroup::Orange => 100,
            ColorGroup::Red | ColorGroup::Yellow => 150,
            ColorGroup::Green | ColorGroup::Indigo => 200,
        }
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Title deed of a street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Street {
    pub name: &'static str,
    pub group: ColorGroup,
    pub price: u32,
    pub rent: u32,
    /// Rent when the owner holds the whole color set, unimproved.
    pub rent_color_set: u32,
    /// Rent with 1 to 4 houses.
    pub rent_houses: [u32; 4],
    pub rent_hotel: u32,
    pub mortgage: u32,
}

impl Street {
    const fn new(
        name: &'static str,
        group: ColorGroup,
        price: u32,
        rent: u32,
        rent_houses: [u32; 4],
        rent_hotel: u32,
    ) -> Self {
        Self {
            name,
            group,
            price,
            rent,
            rent_color_set: rent * 2,
            rent_houses,
            rent_hotel,
            mortgage: price / 2,
        }
    }

    pub fn building_price(&self) -> u32 {
        self.group.building_price()
    }

    /// Amount needed to lift the mortgage.
    pub fn unmortgage_amount(&self) -> u32 {
        unmortgage_amount(self.mortgage)
    }

    /// Labelled rows as shown on the cost panel.
    pub fn cost_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Price", format!("${}", self.price)),
            ("Rent", self.rent.to_string()),
            ("Rent (colorset)", self.rent_color_set.to_string()),
            ("Rent 1 house", self.rent_houses[0].to_string()),
            ("Rent 2 houses", self.rent_houses[1].to_string()),
            ("Rent 3 houses", self.rent_houses[2].to_string()),
            ("Rent 4 houses", self.rent_houses[3].to_string()),
            ("Rent Hotel", self.rent_hotel.to_string()),
            ("House cost", format!("${}", self.building_price())),
            ("Mortgage", self.mortgage.to_string()),
            ("Mortgage Repayment", self.unmortgage_amount().to_string()),
        ]
    }
}

/// Kind of a non-street property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Railroad,
    Utility,
}

/// Railroads and utilities: rent depends on ownership count or the dice,
/// so only price and mortgage are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtherProperty {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub price: u32,
    pub mortgage: u32,
}

impl OtherProperty {
    const fn railroad(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::Railroad,
            price: 200,
            mortgage: 100,
        }
    }

    const fn utility(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::Utility,
            price: 150,
            mortgage: 75,
        }
    }

    pub fn unmortgage_amount(&self) -> u32 {
        unmortgage_amount(self.mortgage)
    }

    /// How rent is worked out.
    pub fn rent_rule(&self) -> &'static str {
        match self.kind {
            PropertyKind::Railroad => "25 / 50 / 100 / 200 for 1-4 railroads owned",
            PropertyKind::Utility => "4x dice roll, 10x if both utilities owned",
        }
    }
}

/// Mortgage value plus 10% interest, rounded to the nearest dollar.
pub fn unmortgage_amount(mortgage: u32) -> u32 {
    (mortgage * 11 + 5) / 10
}

use ColorGroup::*;

/// All streets in board order.
pub static STREETS: [Street; 22] = [
    Street::new("Mediterranean Avenue", Brown, 60, 2, [10, 30, 90, 160], 250),
    Street::new("Baltic Avenue", Brown, 60, 4, [20, 60, 180, 320], 450),
    Street::new("Oriental Avenue", Blue, 100, 6, [30, 90, 270, 400], 550),
    Street::new("Vermont Avenue", Blue, 100, 6, [30, 90, 270, 400], 550),
    Street::new("Connecticut Avenue", Blue, 120, 8, [40, 100, 300, 450], 600),
    Street::new("St. Charles Place", Pink, 140, 10, [50, 150, 450, 625], 750),
    Street::new("States Avenue", Pink, 140, 10, [50, 150, 450, 625], 750),
    Street::new("Virginia Avenue", Pink, 160, 12, [60, 180, 500, 700], 900),
    Street::new("St. James Place", Orange, 180, 14, [70, 200, 550, 750], 950),
    Street::new("Tennessee Avenue", Orange, 180, 14, [70, 200, 550, 750], 950),
    Street::new("New York Avenue", Orange, 200, 16, [80, 220, 600, 800], 1000),
    Street::new("Kentucky Avenue", Red, 220, 18, [90, 250, 700, 875], 1050),
    Street::new("Indiana Avenue", Red, 220, 18, [90, 250, 700, 875], 1050),
    Street::new("Illinois Avenue", Red, 240, 20, [100, 300, 750, 925], 1100),
    Street::new("Atlantic Avenue", Yellow, 260, 22, [110, 330, 800, 975], 1150),
    Street::new("Ventnor Avenue", Yellow, 260, 22, [110, 330, 800, 975], 1150),
    Street::new("Marvin Gardens", Yellow, 280, 24, [120, 360, 850, 1025], 1200),
    Street::new("Pacific Avenue", Green, 300, 26, [130, 390, 900, 1100], 1275),
    Street::new("North Carolina Avenue", Green, 300, 26, [130, 390, 900, 1100], 1275),
    Street::new("Pennsylvania Avenue", Green, 320, 28, [150, 450, 1000, 1200], 1400),
    Street::new("Park Place", Indigo, 350, 35, [175, 500, 1100, 1300], 1500),
    Street::new("Boardwalk", Indigo, 400, 50, [200, 600, 1400, 1700], 2000),
];

/// Railroads and utilities in board order.
pub static OTHER_PROPERTIES: [OtherProperty; 6] = [
    OtherProperty::railroad("Reading Railroad"),
    OtherProperty::utility("Electric Company"),
    OtherProperty::railroad("Pennsylvania Railroad"),
    OtherProperty::railroad("B. & O. Railroad"),
    OtherProperty::utility("Water Works"),
    OtherProperty::railroad("Short Line"),
];

/// Streets belonging to `group`, in board order.
pub fn streets_in_group(group: ColorGroup) -> impl Iterator<Item = &'static Street> {
    STREETS.iter().filter(move |s| s.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mediterranean_deed() {
        let street = &STREETS[0];
        assert_eq!(street.name, "Mediterranean Avenue");
        assert_eq!(street.price, 60);
        assert_eq!(street.rent, 2);
        assert_eq!(street.rent_color_set, 4);
        assert_eq!(street.rent_hotel, 250);
        assert_eq!(street.mortgage, 30);
        assert_eq!(street.unmortgage_amount(), 33);
        assert_eq!(street.building_price(), 50);
    }

    #[test]
    fn test_unmortgage_rounds_half_up() {
        assert_eq!(unmortgage_amount(75), 83);
        assert_eq!(unmortgage_amount(175), 193);
        assert_eq!(unmortgage_amount(100), 110);
    }

    #[test]
    fn test_group_sizes() {
        for group in ColorGroup::ALL {
            let count = streets_in_group(group).count();
            let expected = match group {
                ColorGroup::Brown | ColorGroup::Indigo => 2,
                _ => 3,
            };
            assert_eq!(count, expected, "{group} has {count} streets");
        }
    }

    #[test]
    fn test_rents_increase_with_buildings() {
        for street in &STREETS {
            assert!(street.rent < street.rent_color_set);
            assert!(street.rent_color_set <= street.rent_houses[0]);
            assert!(street.rent_houses.windows(2).all(|w| w[0] < w[1]), "{}", street.name);
            assert!(street.rent_houses[3] < street.rent_hotel);
        }
    }

    #[test]
    fn test_cost_lines_labels() {
        let lines = STREETS[0].cost_lines();
        assert_eq!(lines[0], ("Price", "$60".to_string()));
        assert_eq!(lines.last().unwrap().0, "Mortgage Repayment");
    }

    #[test]
    fn test_other_properties() {
        let railroads = OTHER_PROPERTIES
            .iter()
            .filter(|p| p.kind == PropertyKind::Railroad)
            .count();
        assert_eq!(railroads, 4);
        assert_eq!(OTHER_PROPERTIES[1].unmortgage_amount(), 83);
    }
}
