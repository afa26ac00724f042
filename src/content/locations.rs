use super::Location;

/// Location deck for the spy game. Roles are dealt round-robin, so a full
/// table reuses labels once the list runs out.
pub const LOCATIONS: &[Location] = &[
    Location {
        name: "Airplane",
        roles: &[
            "Pilot",
            "Flight Attendant",
            "Air Marshal",
            "First-Class Passenger",
            "Nervous Flyer",
            "Mechanic",
            "Toddler",
            "Tourist",
        ],
    },
    Location {
        name: "Bank",
        roles: &[
            "Teller",
            "Branch Manager",
            "Security Guard",
            "Armored-Car Driver",
            "Customer",
            "Loan Officer",
            "Robber Casing the Place",
            "Consultant",
        ],
    },
    Location {
        name: "Beach",
        roles: &[
            "Lifeguard",
            "Ice-Cream Vendor",
            "Surfer",
            "Sunburnt Tourist",
            "Volleyball Player",
            "Photographer",
            "Beachcomber",
            "Kite Flyer",
        ],
    },
    Location {
        name: "Casino",
        roles: &[
            "Dealer",
            "Pit Boss",
            "Card Counter",
            "Cocktail Server",
            "High Roller",
            "Security Officer",
            "First-Time Gambler",
            "Lounge Singer",
        ],
    },
    Location {
        name: "Circus",
        roles: &[
            "Ringmaster",
            "Clown",
            "Trapeze Artist",
            "Lion Tamer",
            "Juggler",
            "Ticket Seller",
            "Stagehand",
            "Acrobat",
        ],
    },
    Location {
        name: "Cruise Ship",
        roles: &[
            "Captain",
            "Cabin Steward",
            "Entertainer",
            "Honeymooner",
            "Deckhand",
            "Chef",
            "Seasick Passenger",
            "Cruise Director",
        ],
    },
    Location {
        name: "Hospital",
        roles: &[
            "Surgeon",
            "Nurse",
            "Anesthesiologist",
            "Patient",
            "Orderly",
            "Visitor",
            "Paramedic",
            "Intern",
        ],
    },
    Location {
        name: "Hotel",
        roles: &[
            "Concierge",
            "Housekeeper",
            "Bellhop",
            "Guest",
            "Night Manager",
            "Room-Service Waiter",
            "Doorman",
            "Wedding Planner",
        ],
    },
    Location {
        name: "Military Base",
        roles: &[
            "Colonel",
            "Drill Sergeant",
            "Medic",
            "Recruit",
            "Quartermaster",
            "Radio Operator",
            "Cook",
            "Inspector",
        ],
    },
    Location {
        name: "Movie Studio",
        roles: &[
            "Director",
            "Stunt Double",
            "Camera Operator",
            "Makeup Artist",
            "Lead Actor",
            "Extra",
            "Producer",
            "Boom Operator",
        ],
    },
    Location {
        name: "Polar Station",
        roles: &[
            "Station Chief",
            "Glaciologist",
            "Radio Operator",
            "Mechanic",
            "Cook",
            "Meteorologist",
            "Supply Pilot",
            "Overwintering Biologist",
        ],
    },
    Location {
        name: "Restaurant",
        roles: &[
            "Head Chef",
            "Sommelier",
            "Waiter",
            "Food Critic",
            "Dishwasher",
            "Maitre d'",
            "Regular",
            "Busboy",
        ],
    },
    Location {
        name: "School",
        roles: &[
            "Principal",
            "Math Teacher",
            "Janitor",
            "Student",
            "Gym Coach",
            "Librarian",
            "Lunch Lady",
            "Substitute Teacher",
        ],
    },
    Location {
        name: "Space Station",
        roles: &[
            "Commander",
            "Flight Engineer",
            "Mission Scientist",
            "Space Tourist",
            "Doctor",
            "Payload Specialist",
            "Robotics Operator",
            "Ground-Control Liaison",
        ],
    },
    Location {
        name: "Submarine",
        roles: &[
            "Captain",
            "Sonar Technician",
            "Torpedo Officer",
            "Cook",
            "Navigator",
            "Engineer",
            "Radio Operator",
            "New Crewman",
        ],
    },
    Location {
        name: "Supermarket",
        roles: &[
            "Cashier",
            "Butcher",
            "Shelf Stocker",
            "Store Manager",
            "Sample Demonstrator",
            "Shopper",
            "Delivery Driver",
            "Security Guard",
        ],
    },
    Location {
        name: "Theater",
        roles: &[
            "Lead Actress",
            "Stage Manager",
            "Prompter",
            "Usher",
            "Critic",
            "Costume Designer",
            "Lighting Technician",
            "Understudy",
        ],
    },
    Location {
        name: "Train",
        roles: &[
            "Conductor",
            "Engineer",
            "Dining-Car Waiter",
            "Commuter",
            "Ticket Inspector",
            "Stowaway",
            "Tourist",
            "Porter",
        ],
    },
];
