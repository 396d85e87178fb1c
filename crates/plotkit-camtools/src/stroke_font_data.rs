//! Glyph stroke data for the bundled stroke fonts.
//!
//! Each glyph is a list of strokes and each stroke a flat list of x,y pairs
//! in a unit cell with y pointing down. Umlaut dots sit slightly above the cell.

pub(crate) type GlyphData = (char, &'static [&'static [f64]]);

pub(crate) static SIMPLEX: &[GlyphData] = &[
    (
        '0',
        &[
            &[
                0.2, 0.0, 0.8, 0.0, 1.0, 0.2, 1.0, 0.8, 0.8, 1.0, 0.2, 1.0, 0.0, 0.8, 0.0, 0.2,
                0.2, 0.0,
            ],
        ],
    ),
    ('1', &[&[0.3, 0.2, 0.5, 0.0, 0.5, 1.0], &[0.3, 1.0, 0.7, 1.0]]),
    ('2', &[&[0.1, 0.2, 0.2, 0.0, 0.8, 0.0, 0.9, 0.2, 0.9, 0.4, 0.1, 1.0, 1.0, 1.0]]),
    (
        '3',
        &[
            &[0.1, 0.0, 0.8, 0.0, 0.9, 0.2, 0.9, 0.4, 0.5, 0.5],
            &[0.5, 0.5, 0.9, 0.6, 0.9, 0.8, 0.8, 1.0, 0.1, 1.0],
        ],
    ),
    ('4', &[&[0.7, 1.0, 0.7, 0.0], &[0.7, 0.7, 0.0, 0.7, 0.1, 0.0]]),
    (
        '5',
        &[
            &[
                0.9, 0.0, 0.1, 0.0, 0.1, 0.45, 0.8, 0.45, 0.9, 0.6, 0.9, 0.8, 0.8, 1.0, 0.2, 1.0,
                0.1, 0.8,
            ],
        ],
    ),
    (
        '6',
        &[
            &[
                0.8, 0.1, 0.6, 0.0, 0.3, 0.0, 0.1, 0.2, 0.1, 0.8, 0.3, 1.0, 0.7, 1.0, 0.9, 0.8,
                0.9, 0.6, 0.7, 0.5, 0.3, 0.5, 0.1, 0.6,
            ],
        ],
    ),
    ('7', &[&[0.1, 0.0, 1.0, 0.0, 0.5, 1.0]]),
    (
        '8',
        &[
            &[
                0.3, 0.0, 0.7, 0.0, 0.9, 0.2, 0.9, 0.3, 0.7, 0.5, 0.3, 0.5, 0.1, 0.3, 0.1, 0.2,
                0.3, 0.0,
            ],
            &[0.3, 0.5, 0.1, 0.7, 0.1, 0.8, 0.3, 1.0, 0.7, 1.0, 0.9, 0.8, 0.9, 0.7, 0.7, 0.5],
        ],
    ),
    (
        '9',
        &[
            &[
                0.9, 0.8, 0.7, 1.0, 0.3, 1.0, 0.1, 0.8, 0.1, 0.6, 0.3, 0.5, 0.7, 0.5, 0.9, 0.6,
                0.9, 0.2, 0.7, 0.0, 0.4, 0.0, 0.2, 0.1,
            ],
        ],
    ),
    ('A', &[&[0.0, 1.0, 0.5, 0.0, 1.0, 1.0], &[0.25, 0.6, 0.75, 0.6]]),
    (
        'B',
        &[
            &[0.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.7, 0.0, 0.7, 0.45],
            &[0.0, 0.45, 0.7, 0.45, 0.7, 1.0, 0.0, 1.0],
        ],
    ),
    ('C', &[&[1.0, 0.2, 0.8, 0.0, 0.2, 0.0, 0.0, 0.2, 0.0, 0.8, 0.2, 1.0, 0.8, 1.0, 1.0, 0.8]]),
    ('D', &[&[0.0, 0.0, 0.0, 1.0], &[0.0, 0.0, 0.6, 0.1, 0.7, 0.3, 0.7, 0.7, 0.6, 0.9, 0.0, 1.0]]),
    ('E', &[&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0], &[0.0, 0.5, 0.6, 0.5]]),
    ('F', &[&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0], &[0.0, 0.5, 0.6, 0.5]]),
    (
        'G',
        &[
            &[
                1.0, 0.2, 0.8, 0.0, 0.2, 0.0, 0.0, 0.2, 0.0, 0.8, 0.2, 1.0, 0.8, 1.0, 1.0, 0.8,
                1.0, 0.5, 0.5, 0.5,
            ],
        ],
    ),
    ('H', &[&[0.0, 0.0, 0.0, 1.0], &[1.0, 0.0, 1.0, 1.0], &[0.0, 0.5, 1.0, 0.5]]),
    ('I', &[&[0.3, 0.0, 0.7, 0.0], &[0.5, 0.0, 0.5, 1.0], &[0.3, 1.0, 0.7, 1.0]]),
    ('J', &[&[0.7, 0.0, 0.7, 0.8, 0.5, 1.0, 0.2, 0.9, 0.1, 0.7]]),
    ('K', &[&[0.0, 0.0, 0.0, 1.0], &[0.8, 0.0, 0.0, 0.5], &[0.4, 0.6, 1.0, 1.0]]),
    ('L', &[&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]]),
    ('M', &[&[0.0, 1.0, 0.0, 0.0, 0.5, 0.4, 1.0, 0.0, 1.0, 1.0]]),
    ('N', &[&[0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0]]),
    (
        'O',
        &[
            &[
                0.2, 0.0, 0.8, 0.0, 1.0, 0.2, 1.0, 0.8, 0.8, 1.0, 0.2, 1.0, 0.0, 0.8, 0.0, 0.2,
                0.2, 0.0,
            ],
        ],
    ),
    ('P', &[&[0.0, 1.0, 0.0, 0.0, 0.7, 0.0, 0.8, 0.1, 0.8, 0.4, 0.7, 0.5, 0.0, 0.5]]),
    (
        'Q',
        &[
            &[
                0.2, 0.0, 0.8, 0.0, 1.0, 0.2, 1.0, 0.8, 0.8, 1.0, 0.2, 1.0, 0.0, 0.8, 0.0, 0.2,
                0.2, 0.0,
            ],
            &[0.6, 0.7, 1.1, 1.1],
        ],
    ),
    (
        'R',
        &[
            &[0.0, 1.0, 0.0, 0.0, 0.7, 0.0, 0.8, 0.1, 0.8, 0.4, 0.7, 0.5, 0.0, 0.5],
            &[0.5, 0.5, 1.0, 1.0],
        ],
    ),
    (
        'S',
        &[
            &[
                0.9, 0.2, 0.7, 0.0, 0.3, 0.0, 0.1, 0.2, 0.2, 0.4, 0.8, 0.5, 0.9, 0.6, 0.9, 0.8,
                0.7, 1.0, 0.3, 1.0, 0.1, 0.8,
            ],
        ],
    ),
    ('T', &[&[0.0, 0.0, 1.0, 0.0], &[0.5, 0.0, 0.5, 1.0]]),
    ('U', &[&[0.0, 0.0, 0.0, 0.8, 0.2, 1.0, 0.8, 1.0, 1.0, 0.8, 1.0, 0.0]]),
    ('V', &[&[0.0, 0.0, 0.5, 1.0, 1.0, 0.0]]),
    ('W', &[&[0.0, 0.0, 0.2, 1.0, 0.5, 0.6, 0.8, 1.0, 1.0, 0.0]]),
    ('X', &[&[0.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 0.0, 1.0]]),
    ('Y', &[&[0.0, 0.0, 0.5, 0.5], &[1.0, 0.0, 0.5, 0.5], &[0.5, 0.5, 0.5, 1.0]]),
    ('Z', &[&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]]),
    (
        'Ä',
        &[
            &[0.0, 1.0, 0.5, 0.0, 1.0, 1.0],
            &[0.25, 0.6, 0.75, 0.6],
            &[0.3, -0.2, 0.3, -0.15],
            &[0.7, -0.2, 0.7, -0.15],
        ],
    ),
    (
        'Ö',
        &[
            &[
                0.2, 0.0, 0.8, 0.0, 1.0, 0.2, 1.0, 0.8, 0.8, 1.0, 0.2, 1.0, 0.0, 0.8, 0.0, 0.2,
                0.2, 0.0,
            ],
            &[0.3, -0.2, 0.3, -0.15],
            &[0.7, -0.2, 0.7, -0.15],
        ],
    ),
    (
        'Ü',
        &[
            &[0.0, 0.0, 0.0, 0.8, 0.2, 1.0, 0.8, 1.0, 1.0, 0.8, 1.0, 0.0],
            &[0.3, -0.2, 0.3, -0.15],
            &[0.7, -0.2, 0.7, -0.15],
        ],
    ),
    (
        'ß',
        &[
            &[
                0.0, 0.0, 0.0, 0.7, 0.1, 0.85, 0.3, 0.9, 0.5, 0.85, 0.6, 0.7, 0.6, 0.5, 0.5, 0.4,
                0.7, 0.3, 0.8, 0.5, 0.7, 0.7, 0.5, 1.0, 0.3, 0.9,
            ],
        ],
    ),
    (' ', &[]),
    ('!', &[&[0.5, 0.0, 0.5, 0.6], &[0.5, 0.75, 0.5, 0.8]]),
    ('?', &[&[0.2, 0.2, 0.3, 0.0, 0.7, 0.0, 0.8, 0.2, 0.8, 0.4, 0.5, 0.6], &[0.5, 0.75, 0.5, 0.8]]),
    ('.', &[&[0.5, 0.85, 0.5, 0.9]]),
    (',', &[&[0.5, 0.85, 0.45, 1.0]]),
    (':', &[&[0.5, 0.3, 0.5, 0.35], &[0.5, 0.65, 0.5, 0.7]]),
    (';', &[&[0.5, 0.3, 0.5, 0.35], &[0.5, 0.65, 0.45, 0.75]]),
    ('-', &[&[0.2, 0.5, 0.8, 0.5]]),
    ('_', &[&[0.0, 1.0, 1.0, 1.0]]),
    ('+', &[&[0.5, 0.2, 0.5, 0.8], &[0.2, 0.5, 0.8, 0.5]]),
    ('=', &[&[0.2, 0.4, 0.8, 0.4], &[0.2, 0.6, 0.8, 0.6]]),
];

pub(crate) static COMPLEX: &[GlyphData] = &[
    (
        '0',
        &[
            &[
                0.25, 0.0, 0.75, 0.0, 0.95, 0.2, 0.95, 0.8, 0.75, 1.0, 0.25, 1.0, 0.05, 0.8,
                0.05, 0.2, 0.25, 0.0,
            ],
        ],
    ),
    ('1', &[&[0.3, 0.2, 0.5, 0.0, 0.5, 1.0], &[0.3, 1.0, 0.7, 1.0]]),
    ('2', &[&[0.15, 0.2, 0.25, 0.0, 0.75, 0.0, 0.85, 0.2, 0.85, 0.4, 0.15, 0.95, 0.85, 1.0]]),
    (
        '3',
        &[
            &[0.15, 0.0, 0.75, 0.0, 0.85, 0.15, 0.85, 0.35, 0.55, 0.5],
            &[0.55, 0.5, 0.85, 0.65, 0.85, 0.85, 0.75, 1.0, 0.15, 1.0],
        ],
    ),
    ('4', &[&[0.65, 1.0, 0.7, 0.0], &[0.7, 0.65, 0.05, 0.65, 0.15, 0.05]]),
    (
        '5',
        &[
            &[
                0.85, 0.0, 0.15, 0.0, 0.15, 0.45, 0.75, 0.45, 0.85, 0.6, 0.85, 0.85, 0.75, 1.0,
                0.25, 1.0, 0.15, 0.85,
            ],
        ],
    ),
    (
        '6',
        &[
            &[
                0.75, 0.15, 0.6, 0.0, 0.3, 0.0, 0.15, 0.2, 0.15, 0.75, 0.3, 1.0, 0.7, 1.0,
                0.85, 0.8, 0.85, 0.6, 0.7, 0.5, 0.3, 0.5, 0.15, 0.6,
            ],
        ],
    ),
    ('7', &[&[0.15, 0.0, 0.85, 0.0, 0.5, 1.0]]),
    (
        '8',
        &[
            &[
                0.3, 0.0, 0.7, 0.0, 0.85, 0.15, 0.85, 0.3, 0.7, 0.5, 0.3, 0.5, 0.15, 0.3,
                0.15, 0.15, 0.3, 0.0,
            ],
            &[0.3, 0.5, 0.15, 0.7, 0.15, 0.85, 0.3, 1.0, 0.7, 1.0, 0.85, 0.85, 0.85, 0.7, 0.7, 0.5],
        ],
    ),
    (
        '9',
        &[
            &[
                0.85, 0.8, 0.7, 1.0, 0.3, 1.0, 0.15, 0.8, 0.15, 0.6, 0.3, 0.5, 0.7, 0.5, 0.85, 0.6,
                0.85, 0.25, 0.7, 0.0, 0.4, 0.0, 0.25, 0.15,
            ],
        ],
    ),
    (
        'A',
        &[
            &[0.0, 1.0, 0.5, 0.0, 1.0, 1.0],
            &[0.2, 0.65, 0.8, 0.65],
            &[0.0, 1.0, 0.15, 1.0],
            &[1.0, 1.0, 0.85, 1.0],
        ],
    ),
    (
        'B',
        &[
            &[0.0, 0.0, 0.0, 1.0, 0.1, 1.0, 0.1, 0.0],
            &[0.1, 0.0, 0.65, 0.0, 0.75, 0.05, 0.75, 0.4, 0.65, 0.45, 0.1, 0.45],
            &[0.1, 0.45, 0.7, 0.45, 0.8, 0.5, 0.8, 0.95, 0.7, 1.0, 0.1, 1.0],
        ],
    ),
    (
        'C',
        &[
            &[
                0.9, 0.25, 0.75, 0.05, 0.3, 0.0, 0.1, 0.15, 0.05, 0.35, 0.05, 0.65, 0.1, 0.85,
                0.3, 1.0, 0.75, 0.95, 0.9, 0.75,
            ],
        ],
    ),
    (
        'D',
        &[
            &[0.0, 0.0, 0.0, 1.0, 0.1, 1.0, 0.1, 0.0],
            &[
                0.1, 0.05, 0.6, 0.0, 0.8, 0.15, 0.85, 0.35, 0.85, 0.65, 0.8, 0.85, 0.6, 1.0,
                0.1, 0.95,
            ],
        ],
    ),
    (
        'E',
        &[
            &[0.9, 0.0, 0.0, 0.0, 0.0, 1.0, 0.9, 1.0],
            &[0.1, 0.0, 0.1, 1.0],
            &[0.1, 0.5, 0.6, 0.5],
        ],
    ),
    ('F', &[&[0.9, 0.0, 0.0, 0.0, 0.0, 1.0], &[0.1, 0.0, 0.1, 1.0], &[0.1, 0.5, 0.6, 0.5]]),
    (
        'G',
        &[
            &[
                0.9, 0.25, 0.75, 0.05, 0.3, 0.0, 0.1, 0.15, 0.05, 0.35, 0.05, 0.65, 0.1, 0.85,
                0.3, 1.0, 0.75, 0.95, 0.95, 0.75, 0.95, 0.5, 0.55, 0.5,
            ],
        ],
    ),
    (
        'H',
        &[
            &[0.0, 0.0, 0.0, 1.0],
            &[0.1, 0.0, 0.1, 1.0],
            &[1.0, 0.0, 1.0, 1.0],
            &[0.9, 0.0, 0.9, 1.0],
            &[0.1, 0.5, 0.9, 0.5],
        ],
    ),
    ('I', &[&[0.25, 0.0, 0.75, 0.0], &[0.5, 0.0, 0.5, 1.0], &[0.25, 1.0, 0.75, 1.0]]),
    ('J', &[&[0.7, 0.0, 0.7, 0.75, 0.6, 0.95, 0.4, 1.0, 0.2, 0.95, 0.15, 0.8]]),
    (
        'K',
        &[
            &[0.0, 0.0, 0.0, 1.0],
            &[0.1, 0.0, 0.1, 1.0],
            &[0.9, 0.0, 0.1, 0.5],
            &[0.2, 0.55, 1.0, 1.0],
        ],
    ),
    ('L', &[&[0.0, 0.0, 0.0, 1.0, 0.9, 1.0], &[0.1, 0.0, 0.1, 1.0]]),
    (
        'M',
        &[
            &[0.0, 1.0, 0.0, 0.0],
            &[0.1, 1.0, 0.1, 0.1],
            &[0.1, 0.1, 0.5, 0.5],
            &[0.5, 0.5, 0.9, 0.1],
            &[0.9, 0.1, 0.9, 1.0],
            &[1.0, 0.0, 1.0, 1.0],
        ],
    ),
    (
        'N',
        &[
            &[0.0, 1.0, 0.0, 0.0],
            &[0.1, 1.0, 0.1, 0.15],
            &[0.1, 0.15, 0.9, 1.0],
            &[0.9, 1.0, 0.9, 0.0],
            &[1.0, 0.0, 1.0, 1.0],
        ],
    ),
    (
        'O',
        &[
            &[
                0.25, 0.0, 0.75, 0.0, 0.95, 0.2, 0.95, 0.8, 0.75, 1.0, 0.25, 1.0, 0.05, 0.8,
                0.05, 0.2, 0.25, 0.0,
            ],
        ],
    ),
    (
        'P',
        &[
            &[0.0, 1.0, 0.0, 0.0],
            &[0.1, 0.0, 0.1, 1.0],
            &[0.1, 0.0, 0.7, 0.0, 0.8, 0.1, 0.8, 0.45, 0.7, 0.55, 0.1, 0.55],
        ],
    ),
    (
        'Q',
        &[
            &[
                0.25, 0.0, 0.75, 0.0, 0.95, 0.2, 0.95, 0.8, 0.75, 1.0, 0.25, 1.0, 0.05, 0.8,
                0.05, 0.2, 0.25, 0.0,
            ],
            &[0.65, 0.7, 1.05, 1.1],
        ],
    ),
    (
        'R',
        &[
            &[0.0, 1.0, 0.0, 0.0],
            &[0.1, 0.0, 0.1, 1.0],
            &[0.1, 0.0, 0.7, 0.0, 0.8, 0.1, 0.8, 0.45, 0.7, 0.55, 0.1, 0.55],
            &[0.55, 0.55, 1.0, 1.0],
        ],
    ),
    (
        'S',
        &[
            &[
                0.85, 0.25, 0.7, 0.05, 0.3, 0.0, 0.15, 0.15, 0.2, 0.35, 0.8, 0.45, 0.85, 0.65,
                0.8, 0.85, 0.7, 0.95, 0.3, 1.0, 0.15, 0.75,
            ],
        ],
    ),
    ('T', &[&[0.0, 0.0, 1.0, 0.0], &[0.5, 0.0, 0.5, 1.0]]),
    (
        'U',
        &[
            &[0.0, 0.0, 0.0, 0.75, 0.15, 0.95, 0.4, 1.0, 0.6, 1.0, 0.85, 0.95, 1.0, 0.75, 1.0, 0.0],
        ],
    ),
    ('V', &[&[0.0, 0.0, 0.5, 1.0], &[1.0, 0.0, 0.5, 1.0]]),
    (
        'W',
        &[
            &[0.0, 0.0, 0.2, 1.0],
            &[0.3, 0.6, 0.5, 1.0],
            &[0.7, 0.6, 0.5, 1.0],
            &[1.0, 0.0, 0.8, 1.0],
        ],
    ),
    ('X', &[&[0.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 0.0, 1.0]]),
    ('Y', &[&[0.0, 0.0, 0.5, 0.5], &[1.0, 0.0, 0.5, 0.5], &[0.5, 0.5, 0.5, 1.0]]),
    ('Z', &[&[0.0, 0.0, 1.0, 0.0, 0.05, 0.95, 1.0, 1.0]]),
    (' ', &[]),
    ('!', &[&[0.5, 0.0, 0.5, 0.6], &[0.5, 0.75, 0.5, 0.8]]),
    (
        '?',
        &[
            &[0.25, 0.15, 0.35, 0.0, 0.65, 0.0, 0.75, 0.15, 0.75, 0.35, 0.5, 0.55, 0.5, 0.65],
            &[0.5, 0.75, 0.5, 0.8],
        ],
    ),
    ('.', &[&[0.5, 0.85, 0.5, 0.95]]),
    (',', &[&[0.5, 0.85, 0.45, 1.0]]),
    ('-', &[&[0.2, 0.5, 0.8, 0.5]]),
];

pub(crate) static SCRIPT: &[GlyphData] = &[
    (
        '0',
        &[
            &[
                0.3, 0.05, 0.7, 0.05, 0.85, 0.2, 0.9, 0.45, 0.9, 0.65, 0.85, 0.85, 0.7, 0.95,
                0.3, 0.95, 0.15, 0.85, 0.1, 0.65, 0.1, 0.45, 0.15, 0.2, 0.3, 0.05,
            ],
        ],
    ),
    ('1', &[&[0.35, 0.2, 0.5, 0.05, 0.55, 0.05, 0.55, 0.95, 0.65, 1.0]]),
    (
        '2',
        &[
            &[
                0.2, 0.2, 0.3, 0.05, 0.7, 0.0, 0.85, 0.15, 0.85, 0.35, 0.2, 0.9, 0.25, 0.95,
                0.8, 0.98,
            ],
        ],
    ),
    (
        '3',
        &[
            &[0.2, 0.05, 0.7, 0.0, 0.85, 0.15, 0.85, 0.35, 0.55, 0.5],
            &[0.55, 0.5, 0.85, 0.65, 0.85, 0.85, 0.7, 0.98, 0.2, 0.95],
        ],
    ),
    ('4', &[&[0.65, 0.95, 0.7, 0.05], &[0.7, 0.65, 0.1, 0.65, 0.2, 0.1]]),
    (
        '5',
        &[
            &[
                0.8, 0.05, 0.2, 0.02, 0.2, 0.4, 0.7, 0.45, 0.85, 0.6, 0.85, 0.82, 0.7, 0.96,
                0.3, 0.98, 0.2, 0.88,
            ],
        ],
    ),
    (
        '6',
        &[
            &[
                0.75, 0.2, 0.6, 0.05, 0.35, 0.05, 0.2, 0.2, 0.15, 0.45, 0.15, 0.75, 0.3, 0.95,
                0.65, 0.98, 0.8, 0.85, 0.85, 0.65, 0.7, 0.52, 0.35, 0.5, 0.2, 0.6,
            ],
        ],
    ),
    ('7', &[&[0.2, 0.05, 0.85, 0.0, 0.55, 0.98, 0.6, 1.05]]),
    (
        '8',
        &[
            &[
                0.35, 0.05, 0.65, 0.05, 0.8, 0.18, 0.8, 0.32, 0.65, 0.48, 0.35, 0.48, 0.2, 0.32,
                0.2, 0.18, 0.35, 0.05,
            ],
            &[
                0.35, 0.48, 0.2, 0.65, 0.2, 0.82, 0.35, 0.95, 0.65, 0.95, 0.8, 0.82, 0.8, 0.65,
                0.65, 0.48,
            ],
        ],
    ),
    (
        '9',
        &[
            &[
                0.8, 0.8, 0.65, 0.95, 0.35, 0.95, 0.2, 0.8, 0.15, 0.55, 0.15, 0.25, 0.3, 0.08,
                0.65, 0.05, 0.8, 0.2, 0.85, 0.45, 0.7, 0.52, 0.35, 0.5, 0.2, 0.35,
            ],
        ],
    ),
    ('A', &[&[0.1, 0.9, 0.4, 0.0, 0.6, 0.5, 0.7, 0.85, 0.8, 1.0], &[0.25, 0.6, 0.55, 0.6]]),
    (
        'B',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[0.15, 0.4, 0.5, 0.3, 0.65, 0.35, 0.7, 0.5, 0.6, 0.6, 0.4, 0.65],
            &[0.4, 0.65, 0.65, 0.7, 0.75, 0.85, 0.7, 0.95, 0.5, 1.0],
        ],
    ),
    (
        'C',
        &[
            &[
                0.8, 0.3, 0.65, 0.1, 0.4, 0.05, 0.2, 0.15, 0.1, 0.35, 0.1, 0.65, 0.2, 0.85,
                0.4, 0.95, 0.65, 0.9, 0.8, 0.75,
            ],
        ],
    ),
    (
        'D',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[
                0.15, 0.15, 0.5, 0.05, 0.7, 0.2, 0.75, 0.45, 0.75, 0.75, 0.65, 0.9, 0.45, 0.98,
                0.25, 1.0,
            ],
        ],
    ),
    (
        'E',
        &[
            &[
                0.75, 0.4, 0.65, 0.15, 0.45, 0.05, 0.25, 0.1, 0.15, 0.25, 0.1, 0.45, 0.15, 0.6,
                0.35, 0.7, 0.6, 0.7,
            ],
            &[0.15, 0.65, 0.15, 0.85, 0.25, 0.95, 0.45, 1.0, 0.7, 0.95, 0.85, 0.8],
        ],
    ),
    (
        'F',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.35, 0.0, 0.45, 0.05, 0.5, 0.15],
            &[0.15, 0.15, 0.15, 0.95, 0.25, 1.0],
            &[0.1, 0.5, 0.5, 0.5],
        ],
    ),
    (
        'G',
        &[
            &[
                0.8, 0.3, 0.65, 0.1, 0.4, 0.05, 0.2, 0.15, 0.1, 0.35, 0.1, 0.65, 0.2, 0.85,
                0.45, 0.95, 0.7, 0.9, 0.85, 0.75, 0.85, 0.55, 0.55, 0.55,
            ],
        ],
    ),
    (
        'H',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[0.15, 0.5, 0.55, 0.45, 0.7, 0.5],
            &[0.7, 0.5, 0.75, 0.75, 0.8, 0.9, 0.85, 1.0],
        ],
    ),
    ('I', &[&[0.4, 0.05, 0.45, 0.0, 0.5, 0.05, 0.5, 0.9, 0.6, 1.0]]),
    (
        'J',
        &[
            &[
                0.5, 0.05, 0.55, 0.0, 0.6, 0.05, 0.6, 0.75, 0.5, 0.95, 0.35, 1.0, 0.2, 0.95,
                0.15, 0.8,
            ],
        ],
    ),
    (
        'K',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[0.7, 0.1, 0.2, 0.5],
            &[0.35, 0.55, 0.75, 0.95, 0.85, 1.0],
        ],
    ),
    (
        'L',
        &[
            &[
                0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.85, 0.25, 0.95, 0.45, 1.0, 0.7, 0.95,
                0.85, 0.85,
            ],
        ],
    ),
    (
        'M',
        &[
            &[0.05, 0.95, 0.1, 1.0],
            &[0.1, 1.0, 0.1, 0.1, 0.15, 0.0],
            &[0.15, 0.0, 0.35, 0.45, 0.45, 0.65],
            &[0.45, 0.65, 0.6, 0.45, 0.75, 0.0],
            &[0.75, 0.0, 0.8, 0.05, 0.8, 0.95, 0.9, 1.0],
        ],
    ),
    (
        'N',
        &[
            &[0.05, 0.95, 0.1, 1.0],
            &[0.1, 1.0, 0.1, 0.1, 0.15, 0.0],
            &[0.15, 0.0, 0.7, 0.85, 0.75, 0.95],
            &[0.75, 0.95, 0.75, 0.1, 0.8, 0.0, 0.85, 0.05],
        ],
    ),
    (
        'O',
        &[
            &[
                0.3, 0.05, 0.7, 0.05, 0.85, 0.2, 0.9, 0.45, 0.9, 0.65, 0.85, 0.85, 0.7, 0.95,
                0.3, 0.95, 0.15, 0.85, 0.1, 0.65, 0.1, 0.45, 0.15, 0.2, 0.3, 0.05,
            ],
        ],
    ),
    (
        'P',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[0.15, 0.1, 0.55, 0.05, 0.7, 0.15, 0.75, 0.35, 0.7, 0.5, 0.55, 0.6, 0.25, 0.6],
        ],
    ),
    (
        'Q',
        &[
            &[
                0.3, 0.05, 0.7, 0.05, 0.85, 0.2, 0.9, 0.45, 0.9, 0.65, 0.85, 0.85, 0.7, 0.95,
                0.3, 0.95, 0.15, 0.85, 0.1, 0.65, 0.1, 0.45, 0.15, 0.2, 0.3, 0.05,
            ],
            &[0.65, 0.75, 0.9, 1.05, 1.0, 1.1],
        ],
    ),
    (
        'R',
        &[
            &[0.05, 0.1, 0.1, 0.0, 0.15, 0.05, 0.15, 0.95, 0.25, 1.0],
            &[0.15, 0.1, 0.55, 0.05, 0.7, 0.15, 0.75, 0.35, 0.7, 0.5, 0.55, 0.6, 0.25, 0.6],
            &[0.45, 0.6, 0.75, 0.95, 0.9, 1.05],
        ],
    ),
    (
        'S',
        &[
            &[
                0.8, 0.25, 0.7, 0.1, 0.45, 0.05, 0.25, 0.15, 0.2, 0.3, 0.35, 0.45, 0.65, 0.5,
                0.8, 0.65, 0.8, 0.8, 0.65, 0.92, 0.4, 0.97, 0.2, 0.85,
            ],
        ],
    ),
    ('T', &[&[0.5, 0.05, 0.55, 0.0, 0.6, 0.05, 0.6, 0.9, 0.7, 1.0], &[0.25, 0.15, 0.85, 0.05]]),
    (
        'U',
        &[
            &[
                0.1, 0.05, 0.15, 0.0, 0.2, 0.05, 0.2, 0.75, 0.3, 0.92, 0.5, 0.98, 0.7, 0.92,
                0.75, 0.75,
            ],
            &[0.75, 0.75, 0.8, 0.9, 0.85, 1.0],
        ],
    ),
    (
        'V',
        &[
            &[0.1, 0.05, 0.15, 0.0, 0.2, 0.05, 0.5, 0.95, 0.6, 1.0],
            &[0.7, 0.05, 0.75, 0.0, 0.8, 0.05, 0.6, 1.0],
        ],
    ),
    (
        'W',
        &[
            &[0.05, 0.05, 0.1, 0.0, 0.15, 0.05, 0.3, 0.95, 0.35, 1.0],
            &[0.45, 0.05, 0.5, 0.0, 0.55, 0.05, 0.35, 1.0],
            &[0.65, 0.05, 0.7, 0.0, 0.75, 0.05, 0.55, 1.0],
            &[0.85, 0.05, 0.9, 0.0, 0.95, 0.05, 0.75, 1.0],
        ],
    ),
    (
        'X',
        &[
            &[0.1, 0.05, 0.15, 0.0, 0.7, 0.92, 0.8, 1.0],
            &[0.75, 0.05, 0.8, 0.0, 0.25, 0.92, 0.15, 1.0],
        ],
    ),
    (
        'Y',
        &[
            &[0.1, 0.05, 0.15, 0.0, 0.2, 0.05, 0.45, 0.55],
            &[0.7, 0.05, 0.75, 0.0, 0.8, 0.05, 0.45, 0.55],
            &[0.45, 0.55, 0.5, 0.9, 0.6, 1.0],
        ],
    ),
    ('Z', &[&[0.15, 0.1, 0.75, 0.05, 0.85, 0.1, 0.25, 0.9, 0.8, 0.95, 0.9, 1.0]]),
    (' ', &[]),
    ('!', &[&[0.5, 0.0, 0.5, 0.6], &[0.5, 0.75, 0.5, 0.8]]),
    (
        '?',
        &[
            &[0.25, 0.2, 0.35, 0.05, 0.65, 0.0, 0.75, 0.15, 0.75, 0.35, 0.5, 0.55, 0.5, 0.65],
            &[0.5, 0.75, 0.5, 0.8],
        ],
    ),
    ('.', &[&[0.5, 0.85, 0.5, 0.95]]),
    (',', &[&[0.5, 0.85, 0.45, 1.0]]),
];
