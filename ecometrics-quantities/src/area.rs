quantity!(SquareMeters, "m²");
