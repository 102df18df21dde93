//! Female scoring charts, chart version 0 (provisional September 2025).
//!
//! Rows are `row(threshold, points_in_tenths)`, best performance first.

use super::{BracketCharts, Chart, ScoreRow, row};

pub(super) static AGE_U25: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_U25),
    hamr: Chart::Table(HAMR_U25),
    walk_2km: Chart::Table(WALK_2KM_U25),
    pushups: Chart::Table(PUSHUPS_U25),
    hand_release_pushups: Chart::Table(HRPU_U25),
    situps: Chart::Table(SITUPS_U25),
    cross_leg_reverse_crunch: Chart::Table(CLRC_U25),
    plank: Chart::Table(PLANK_U25),
};

pub(super) static AGE_25_29: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_25_29),
    hamr: Chart::Table(HAMR_25_29),
    walk_2km: Chart::Table(WALK_2KM_25_29),
    pushups: Chart::Table(PUSHUPS_25_29),
    hand_release_pushups: Chart::Table(HRPU_25_29),
    situps: Chart::Table(SITUPS_25_29),
    cross_leg_reverse_crunch: Chart::Table(CLRC_25_29),
    plank: Chart::Table(PLANK_25_29),
};

pub(super) static AGE_30_34: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_30_34),
    hamr: Chart::Table(HAMR_30_34),
    walk_2km: Chart::Table(WALK_2KM_30_34),
    pushups: Chart::Table(PUSHUPS_30_34),
    hand_release_pushups: Chart::Table(HRPU_30_34),
    situps: Chart::Table(SITUPS_30_34),
    cross_leg_reverse_crunch: Chart::Table(CLRC_30_34),
    plank: Chart::Table(PLANK_30_34),
};

pub(super) static AGE_35_39: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_35_39),
    hamr: Chart::Table(HAMR_35_39),
    walk_2km: Chart::Table(WALK_2KM_35_39),
    pushups: Chart::Table(PUSHUPS_35_39),
    hand_release_pushups: Chart::Table(HRPU_35_39),
    situps: Chart::Table(SITUPS_35_39),
    cross_leg_reverse_crunch: Chart::Table(CLRC_35_39),
    plank: Chart::Table(PLANK_35_39),
};

pub(super) static AGE_40_44: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_40_44),
    hamr: Chart::Table(HAMR_40_44),
    walk_2km: Chart::Table(WALK_2KM_40_44),
    pushups: Chart::Table(PUSHUPS_40_44),
    hand_release_pushups: Chart::Table(HRPU_40_44),
    situps: Chart::Table(SITUPS_40_44),
    cross_leg_reverse_crunch: Chart::Table(CLRC_40_44),
    plank: Chart::Table(PLANK_40_44),
};

pub(super) static AGE_45_49: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_45_49),
    hamr: Chart::Table(HAMR_45_49),
    walk_2km: Chart::Table(WALK_2KM_45_49),
    pushups: Chart::Table(PUSHUPS_45_49),
    hand_release_pushups: Chart::Table(HRPU_45_49),
    situps: Chart::Table(SITUPS_45_49),
    cross_leg_reverse_crunch: Chart::Table(CLRC_45_49),
    plank: Chart::Table(PLANK_45_49),
};

pub(super) static AGE_50_54: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_50_54),
    hamr: Chart::Table(HAMR_50_54),
    walk_2km: Chart::Table(WALK_2KM_50_54),
    pushups: Chart::Table(PUSHUPS_50_54),
    hand_release_pushups: Chart::Table(HRPU_50_54),
    situps: Chart::Table(SITUPS_50_54),
    cross_leg_reverse_crunch: Chart::Table(CLRC_50_54),
    plank: Chart::Table(PLANK_50_54),
};

pub(super) static AGE_55_59: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_55_59),
    hamr: Chart::Table(HAMR_55_59),
    walk_2km: Chart::Table(WALK_2KM_55_59),
    pushups: Chart::Table(PUSHUPS_55_59),
    hand_release_pushups: Chart::Table(HRPU_55_59),
    situps: Chart::Table(SITUPS_55_59),
    cross_leg_reverse_crunch: Chart::Table(CLRC_55_59),
    plank: Chart::Table(PLANK_55_59),
};

pub(super) static AGE_60_PLUS: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_60_PLUS),
    hamr: Chart::Table(HAMR_60_PLUS),
    walk_2km: Chart::Table(WALK_2KM_60_PLUS),
    pushups: Chart::Table(PUSHUPS_60_PLUS),
    hand_release_pushups: Chart::Table(HRPU_60_PLUS),
    situps: Chart::Table(SITUPS_60_PLUS),
    cross_leg_reverse_crunch: Chart::Table(CLRC_60_PLUS),
    plank: Chart::Table(PLANK_60_PLUS),
};

// <25

const RUN_2MILE_U25: &[ScoreRow] = &[
    row(930, 500), row(945, 489), row(960, 478), row(975, 467), row(990, 456), row(1005, 444),
    row(1020, 433), row(1035, 422), row(1050, 411), row(1065, 400), row(1080, 389), row(1095, 378),
    row(1110, 367), row(1125, 356), row(1140, 344), row(1155, 333), row(1170, 322), row(1185, 311),
    row(1200, 300), row(1230, 266), row(1260, 231), row(1290, 197), row(1320, 163), row(1350, 128),
    row(1380, 94), row(1410, 59), row(1440, 25),
];

const HAMR_U25: &[ScoreRow] = &[
    row(80, 500), row(78, 489), row(76, 478), row(74, 467), row(72, 456), row(70, 444),
    row(68, 433), row(66, 422), row(64, 411), row(62, 400), row(60, 389), row(58, 378),
    row(56, 367), row(54, 356), row(52, 344), row(50, 333), row(48, 322), row(46, 311),
    row(44, 300), row(42, 273), row(40, 245), row(38, 218), row(36, 190), row(34, 163),
    row(32, 135), row(30, 108), row(28, 80), row(26, 53), row(24, 25),
];

const WALK_2KM_U25: &[ScoreRow] = &[
    row(1080, 500), row(1095, 488), row(1110, 475), row(1125, 463), row(1140, 450), row(1155, 438),
    row(1170, 425), row(1185, 413), row(1200, 400), row(1215, 388), row(1230, 375), row(1245, 363),
    row(1260, 350), row(1275, 338), row(1290, 325), row(1305, 313), row(1320, 300), row(1350, 254),
    row(1380, 208), row(1410, 163), row(1440, 117), row(1470, 71), row(1500, 25),
];

const PUSHUPS_U25: &[ScoreRow] = &[
    row(44, 150), row(42, 144), row(40, 138), row(38, 132), row(36, 126), row(34, 120),
    row(32, 114), row(30, 108), row(28, 102), row(26, 96), row(24, 90), row(23, 83),
    row(22, 75), row(21, 68), row(20, 60), row(19, 53), row(18, 45), row(17, 38),
    row(16, 30), row(15, 23), row(14, 15), row(13, 8),
];

const HRPU_U25: &[ScoreRow] = &[
    row(38, 150), row(36, 143), row(34, 135), row(32, 128), row(30, 120), row(28, 113),
    row(26, 105), row(24, 98), row(22, 90), row(21, 82), row(20, 74), row(19, 65),
    row(18, 57), row(17, 49), row(16, 41), row(15, 33), row(14, 24), row(13, 16),
    row(12, 8),
];

const SITUPS_U25: &[ScoreRow] = &[
    row(54, 150), row(52, 144), row(50, 138), row(48, 132), row(46, 126), row(44, 120),
    row(42, 114), row(40, 108), row(38, 102), row(36, 96), row(34, 90), row(33, 84),
    row(32, 78), row(31, 72), row(30, 67), row(29, 61), row(28, 55), row(27, 49),
    row(26, 43), row(25, 37), row(24, 31), row(23, 26), row(22, 20), row(21, 14),
    row(20, 8),
];

const CLRC_U25: &[ScoreRow] = &[
    row(52, 150), row(50, 144), row(48, 138), row(46, 132), row(44, 126), row(42, 120),
    row(40, 114), row(38, 108), row(36, 102), row(34, 96), row(32, 90), row(31, 84),
    row(30, 78), row(29, 72), row(28, 67), row(27, 61), row(26, 55), row(25, 49),
    row(24, 43), row(23, 37), row(22, 31), row(21, 26), row(20, 20), row(19, 14),
    row(18, 8),
];

const PLANK_U25: &[ScoreRow] = &[
    row(200, 150), row(190, 145), row(180, 140), row(170, 134), row(160, 129), row(150, 124),
    row(140, 119), row(130, 113), row(120, 108), row(110, 103), row(100, 98), row(90, 93),
    row(85, 90), row(80, 81), row(75, 72), row(70, 63), row(65, 54), row(60, 44),
    row(55, 35), row(50, 26), row(45, 17), row(40, 8),
];

// 25-29

const RUN_2MILE_25_29: &[ScoreRow] = &[
    row(950, 500), row(965, 489), row(980, 478), row(995, 467), row(1010, 456), row(1025, 444),
    row(1040, 433), row(1055, 422), row(1070, 411), row(1085, 400), row(1100, 389), row(1115, 378),
    row(1130, 367), row(1145, 356), row(1160, 344), row(1175, 333), row(1190, 322), row(1205, 311),
    row(1220, 300), row(1250, 266), row(1280, 231), row(1310, 197), row(1340, 163), row(1370, 128),
    row(1400, 94), row(1430, 59), row(1460, 25),
];

const HAMR_25_29: &[ScoreRow] = &[
    row(76, 500), row(74, 489), row(72, 477), row(70, 466), row(68, 454), row(66, 443),
    row(64, 431), row(62, 420), row(60, 409), row(58, 397), row(56, 386), row(54, 374),
    row(52, 363), row(50, 351), row(48, 340), row(46, 329), row(44, 317), row(42, 306),
    row(41, 300), row(39, 271), row(37, 242), row(35, 213), row(33, 184), row(31, 155),
    row(29, 126), row(27, 97), row(25, 68), row(23, 39), row(22, 25),
];

const WALK_2KM_25_29: &[ScoreRow] = &[
    row(1100, 500), row(1115, 488), row(1130, 475), row(1145, 463), row(1160, 450), row(1175, 438),
    row(1190, 425), row(1205, 413), row(1220, 400), row(1235, 388), row(1250, 375), row(1265, 363),
    row(1280, 350), row(1295, 338), row(1310, 325), row(1325, 313), row(1340, 300), row(1370, 254),
    row(1400, 208), row(1430, 163), row(1460, 117), row(1490, 71), row(1520, 25),
];

const PUSHUPS_25_29: &[ScoreRow] = &[
    row(41, 150), row(39, 144), row(37, 137), row(35, 131), row(33, 125), row(31, 118),
    row(29, 112), row(27, 106), row(25, 99), row(23, 93), row(22, 90), row(21, 82),
    row(20, 74), row(19, 65), row(18, 57), row(17, 49), row(16, 41), row(15, 33),
    row(14, 24), row(13, 16), row(12, 8),
];

const HRPU_25_29: &[ScoreRow] = &[
    row(36, 150), row(34, 142), row(32, 134), row(30, 126), row(28, 118), row(26, 110),
    row(24, 102), row(22, 94), row(21, 90), row(20, 82), row(19, 74), row(18, 65),
    row(17, 57), row(16, 49), row(15, 41), row(14, 33), row(13, 24), row(12, 16),
    row(11, 8),
];

const SITUPS_25_29: &[ScoreRow] = &[
    row(51, 150), row(49, 144), row(47, 137), row(45, 131), row(43, 125), row(41, 118),
    row(39, 112), row(37, 106), row(35, 99), row(33, 93), row(32, 90), row(31, 84),
    row(30, 77), row(29, 71), row(28, 65), row(27, 58), row(26, 52), row(25, 46),
    row(24, 40), row(23, 33), row(22, 27), row(21, 21), row(20, 14), row(19, 8),
];

const CLRC_25_29: &[ScoreRow] = &[
    row(49, 150), row(47, 144), row(45, 137), row(43, 131), row(41, 125), row(39, 118),
    row(37, 112), row(35, 106), row(33, 99), row(31, 93), row(30, 90), row(29, 84),
    row(28, 77), row(27, 71), row(26, 65), row(25, 58), row(24, 52), row(23, 46),
    row(22, 40), row(21, 33), row(20, 27), row(19, 21), row(18, 14), row(17, 8),
];

const PLANK_25_29: &[ScoreRow] = &[
    row(190, 150), row(180, 145), row(170, 139), row(160, 134), row(150, 128), row(140, 123),
    row(130, 117), row(120, 112), row(110, 106), row(100, 101), row(90, 95), row(80, 90),
    row(75, 80), row(70, 71), row(65, 61), row(60, 52), row(55, 42), row(50, 33),
    row(45, 23), row(40, 14), row(37, 8),
];

// 30-34

const RUN_2MILE_30_34: &[ScoreRow] = &[
    row(970, 500), row(985, 489), row(1000, 478), row(1015, 467), row(1030, 456), row(1045, 444),
    row(1060, 433), row(1075, 422), row(1090, 411), row(1105, 400), row(1120, 389), row(1135, 378),
    row(1150, 367), row(1165, 356), row(1180, 344), row(1195, 333), row(1210, 322), row(1225, 311),
    row(1240, 300), row(1270, 266), row(1300, 231), row(1330, 197), row(1360, 163), row(1390, 128),
    row(1420, 94), row(1450, 59), row(1480, 25),
];

const HAMR_30_34: &[ScoreRow] = &[
    row(72, 500), row(70, 488), row(68, 476), row(66, 465), row(64, 453), row(62, 441),
    row(60, 429), row(58, 418), row(56, 406), row(54, 394), row(52, 382), row(50, 371),
    row(48, 359), row(46, 347), row(44, 335), row(42, 324), row(40, 312), row(38, 300),
    row(36, 269), row(34, 239), row(32, 208), row(30, 178), row(28, 147), row(26, 117),
    row(24, 86), row(22, 56), row(20, 25),
];

const WALK_2KM_30_34: &[ScoreRow] = &[
    row(1120, 500), row(1135, 488), row(1150, 475), row(1165, 463), row(1180, 450), row(1195, 438),
    row(1210, 425), row(1225, 413), row(1240, 400), row(1255, 388), row(1270, 375), row(1285, 363),
    row(1300, 350), row(1315, 338), row(1330, 325), row(1345, 313), row(1360, 300), row(1390, 254),
    row(1420, 208), row(1450, 163), row(1480, 117), row(1510, 71), row(1540, 25),
];

const PUSHUPS_30_34: &[ScoreRow] = &[
    row(38, 150), row(36, 143), row(34, 137), row(32, 130), row(30, 123), row(28, 117),
    row(26, 110), row(24, 103), row(22, 97), row(20, 90), row(19, 81), row(18, 72),
    row(17, 63), row(16, 54), row(15, 44), row(14, 35), row(13, 26), row(12, 17),
    row(11, 8),
];

const HRPU_30_34: &[ScoreRow] = &[
    row(34, 150), row(32, 141), row(30, 133), row(28, 124), row(26, 116), row(24, 107),
    row(22, 99), row(20, 90), row(19, 82), row(18, 74), row(17, 65), row(16, 57),
    row(15, 49), row(14, 41), row(13, 33), row(12, 24), row(11, 16), row(10, 8),
];

const SITUPS_30_34: &[ScoreRow] = &[
    row(48, 150), row(46, 143), row(44, 137), row(42, 130), row(40, 123), row(38, 117),
    row(36, 110), row(34, 103), row(32, 97), row(30, 90), row(29, 83), row(28, 76),
    row(27, 70), row(26, 63), row(25, 56), row(24, 49), row(23, 42), row(22, 35),
    row(21, 29), row(20, 22), row(19, 15), row(18, 8),
];

const CLRC_30_34: &[ScoreRow] = &[
    row(46, 150), row(44, 143), row(42, 137), row(40, 130), row(38, 123), row(36, 117),
    row(34, 110), row(32, 103), row(30, 97), row(28, 90), row(27, 83), row(26, 76),
    row(25, 70), row(24, 63), row(23, 56), row(22, 49), row(21, 42), row(20, 35),
    row(19, 29), row(18, 22), row(17, 15), row(16, 8),
];

const PLANK_30_34: &[ScoreRow] = &[
    row(180, 150), row(170, 144), row(160, 139), row(150, 133), row(140, 127), row(130, 121),
    row(120, 116), row(110, 110), row(100, 104), row(90, 99), row(80, 93), row(75, 90),
    row(70, 80), row(65, 70), row(60, 60), row(55, 50), row(50, 40), row(45, 30),
    row(40, 20), row(35, 10), row(34, 8),
];

// 35-39

const RUN_2MILE_35_39: &[ScoreRow] = &[
    row(990, 500), row(1005, 489), row(1020, 478), row(1035, 467), row(1050, 456), row(1065, 444),
    row(1080, 433), row(1095, 422), row(1110, 411), row(1125, 400), row(1140, 389), row(1155, 378),
    row(1170, 367), row(1185, 356), row(1200, 344), row(1215, 333), row(1230, 322), row(1245, 311),
    row(1260, 300), row(1290, 266), row(1320, 231), row(1350, 197), row(1380, 163), row(1410, 128),
    row(1440, 94), row(1470, 59), row(1500, 25),
];

const HAMR_35_39: &[ScoreRow] = &[
    row(68, 500), row(66, 488), row(64, 476), row(62, 464), row(60, 452), row(58, 439),
    row(56, 427), row(54, 415), row(52, 403), row(50, 391), row(48, 379), row(46, 367),
    row(44, 355), row(42, 342), row(40, 330), row(38, 318), row(36, 306), row(35, 300),
    row(33, 268), row(31, 235), row(29, 203), row(27, 171), row(25, 138), row(23, 106),
    row(21, 74), row(19, 41), row(18, 25),
];

const WALK_2KM_35_39: &[ScoreRow] = &[
    row(1140, 500), row(1155, 488), row(1170, 475), row(1185, 463), row(1200, 450), row(1215, 438),
    row(1230, 425), row(1245, 413), row(1260, 400), row(1275, 388), row(1290, 375), row(1305, 363),
    row(1320, 350), row(1335, 338), row(1350, 325), row(1365, 313), row(1380, 300), row(1410, 254),
    row(1440, 208), row(1470, 163), row(1500, 117), row(1530, 71), row(1560, 25),
];

const PUSHUPS_35_39: &[ScoreRow] = &[
    row(35, 150), row(33, 143), row(31, 136), row(29, 129), row(27, 122), row(25, 115),
    row(23, 108), row(21, 101), row(19, 94), row(18, 90), row(17, 80), row(16, 70),
    row(15, 59), row(14, 49), row(13, 39), row(12, 29), row(11, 18), row(10, 8),
];

const HRPU_35_39: &[ScoreRow] = &[
    row(32, 150), row(30, 141), row(28, 132), row(26, 122), row(24, 113), row(22, 104),
    row(20, 95), row(19, 90), row(18, 82), row(17, 74), row(16, 65), row(15, 57),
    row(14, 49), row(13, 41), row(12, 33), row(11, 24), row(10, 16), row(9, 8),
];

const SITUPS_35_39: &[ScoreRow] = &[
    row(45, 150), row(43, 143), row(41, 136), row(39, 129), row(37, 122), row(35, 115),
    row(33, 108), row(31, 101), row(29, 94), row(28, 90), row(27, 83), row(26, 75),
    row(25, 68), row(24, 60), row(23, 53), row(22, 45), row(21, 38), row(20, 30),
    row(19, 23), row(18, 15), row(17, 8),
];

const CLRC_35_39: &[ScoreRow] = &[
    row(43, 150), row(41, 143), row(39, 136), row(37, 129), row(35, 122), row(33, 115),
    row(31, 108), row(29, 101), row(27, 94), row(26, 90), row(25, 83), row(24, 75),
    row(23, 68), row(22, 60), row(21, 53), row(20, 45), row(19, 38), row(18, 30),
    row(17, 23), row(16, 15), row(15, 8),
];

const PLANK_35_39: &[ScoreRow] = &[
    row(170, 150), row(160, 144), row(150, 138), row(140, 132), row(130, 126), row(120, 120),
    row(110, 114), row(100, 108), row(90, 102), row(80, 96), row(70, 90), row(65, 79),
    row(60, 69), row(55, 58), row(50, 48), row(45, 37), row(40, 27), row(35, 16),
    row(31, 8),
];

// 40-44

const RUN_2MILE_40_44: &[ScoreRow] = &[
    row(1010, 500), row(1025, 489), row(1040, 478), row(1055, 467), row(1070, 456), row(1085, 444),
    row(1100, 433), row(1115, 422), row(1130, 411), row(1145, 400), row(1160, 389), row(1175, 378),
    row(1190, 367), row(1205, 356), row(1220, 344), row(1235, 333), row(1250, 322), row(1265, 311),
    row(1280, 300), row(1310, 266), row(1340, 231), row(1370, 197), row(1400, 163), row(1430, 128),
    row(1460, 94), row(1490, 59), row(1520, 25),
];

const HAMR_40_44: &[ScoreRow] = &[
    row(64, 500), row(62, 488), row(60, 475), row(58, 463), row(56, 450), row(54, 438),
    row(52, 425), row(50, 413), row(48, 400), row(46, 388), row(44, 375), row(42, 363),
    row(40, 350), row(38, 338), row(36, 325), row(34, 313), row(32, 300), row(30, 266),
    row(28, 231), row(26, 197), row(24, 163), row(22, 128), row(20, 94), row(18, 59),
    row(16, 25),
];

const WALK_2KM_40_44: &[ScoreRow] = &[
    row(1160, 500), row(1175, 488), row(1190, 475), row(1205, 463), row(1220, 450), row(1235, 438),
    row(1250, 425), row(1265, 413), row(1280, 400), row(1295, 388), row(1310, 375), row(1325, 363),
    row(1340, 350), row(1355, 338), row(1370, 325), row(1385, 313), row(1400, 300), row(1430, 254),
    row(1460, 208), row(1490, 163), row(1520, 117), row(1550, 71), row(1580, 25),
];

const PUSHUPS_40_44: &[ScoreRow] = &[
    row(32, 150), row(30, 143), row(28, 135), row(26, 128), row(24, 120), row(22, 113),
    row(20, 105), row(18, 98), row(16, 90), row(15, 78), row(14, 67), row(13, 55),
    row(12, 43), row(11, 31), row(10, 20), row(9, 8),
];

const HRPU_40_44: &[ScoreRow] = &[
    row(30, 150), row(28, 140), row(26, 130), row(24, 120), row(22, 110), row(20, 100),
    row(18, 90), row(17, 82), row(16, 74), row(15, 65), row(14, 57), row(13, 49),
    row(12, 41), row(11, 33), row(10, 24), row(9, 16), row(8, 8),
];

const SITUPS_40_44: &[ScoreRow] = &[
    row(42, 150), row(40, 143), row(38, 135), row(36, 128), row(34, 120), row(32, 113),
    row(30, 105), row(28, 98), row(26, 90), row(25, 82), row(24, 74), row(23, 65),
    row(22, 57), row(21, 49), row(20, 41), row(19, 33), row(18, 24), row(17, 16),
    row(16, 8),
];

const CLRC_40_44: &[ScoreRow] = &[
    row(40, 150), row(38, 143), row(36, 135), row(34, 128), row(32, 120), row(30, 113),
    row(28, 105), row(26, 98), row(24, 90), row(23, 82), row(22, 74), row(21, 65),
    row(20, 57), row(19, 49), row(18, 41), row(17, 33), row(16, 24), row(15, 16),
    row(14, 8),
];

const PLANK_40_44: &[ScoreRow] = &[
    row(160, 150), row(150, 144), row(140, 137), row(130, 131), row(120, 125), row(110, 118),
    row(100, 112), row(90, 106), row(80, 99), row(70, 93), row(65, 90), row(60, 79),
    row(55, 68), row(50, 57), row(45, 46), row(40, 35), row(35, 24), row(30, 12),
    row(28, 8),
];

// 45-49

const RUN_2MILE_45_49: &[ScoreRow] = &[
    row(1030, 500), row(1045, 489), row(1060, 478), row(1075, 467), row(1090, 456), row(1105, 444),
    row(1120, 433), row(1135, 422), row(1150, 411), row(1165, 400), row(1180, 389), row(1195, 378),
    row(1210, 367), row(1225, 356), row(1240, 344), row(1255, 333), row(1270, 322), row(1285, 311),
    row(1300, 300), row(1330, 266), row(1360, 231), row(1390, 197), row(1420, 163), row(1450, 128),
    row(1480, 94), row(1510, 59), row(1540, 25),
];

const HAMR_45_49: &[ScoreRow] = &[
    row(60, 500), row(58, 487), row(56, 474), row(54, 461), row(52, 448), row(50, 435),
    row(48, 423), row(46, 410), row(44, 397), row(42, 384), row(40, 371), row(38, 358),
    row(36, 345), row(34, 332), row(32, 319), row(30, 306), row(29, 300), row(27, 263),
    row(25, 227), row(23, 190), row(21, 153), row(19, 117), row(17, 80), row(15, 43),
    row(14, 25),
];

const WALK_2KM_45_49: &[ScoreRow] = &[
    row(1180, 500), row(1195, 488), row(1210, 475), row(1225, 463), row(1240, 450), row(1255, 438),
    row(1270, 425), row(1285, 413), row(1300, 400), row(1315, 388), row(1330, 375), row(1345, 363),
    row(1360, 350), row(1375, 338), row(1390, 325), row(1405, 313), row(1420, 300), row(1450, 254),
    row(1480, 208), row(1510, 163), row(1540, 117), row(1570, 71), row(1600, 25),
];

const PUSHUPS_45_49: &[ScoreRow] = &[
    row(29, 150), row(27, 142), row(25, 134), row(23, 126), row(21, 118), row(19, 110),
    row(17, 102), row(15, 94), row(14, 90), row(13, 76), row(12, 63), row(11, 49),
    row(10, 35), row(9, 22), row(8, 8),
];

const HRPU_45_49: &[ScoreRow] = &[
    row(28, 150), row(26, 139), row(24, 128), row(22, 117), row(20, 106), row(18, 95),
    row(17, 90), row(16, 82), row(15, 74), row(14, 65), row(13, 57), row(12, 49),
    row(11, 41), row(10, 33), row(9, 24), row(8, 16), row(7, 8),
];

const SITUPS_45_49: &[ScoreRow] = &[
    row(39, 150), row(37, 142), row(35, 134), row(33, 126), row(31, 118), row(29, 110),
    row(27, 102), row(25, 94), row(24, 90), row(23, 81), row(22, 72), row(21, 63),
    row(20, 54), row(19, 44), row(18, 35), row(17, 26), row(16, 17), row(15, 8),
];

const CLRC_45_49: &[ScoreRow] = &[
    row(37, 150), row(35, 142), row(33, 134), row(31, 126), row(29, 118), row(27, 110),
    row(25, 102), row(23, 94), row(22, 90), row(21, 81), row(20, 72), row(19, 63),
    row(18, 54), row(17, 44), row(16, 35), row(15, 26), row(14, 17), row(13, 8),
];

const PLANK_45_49: &[ScoreRow] = &[
    row(150, 150), row(140, 143), row(130, 137), row(120, 130), row(110, 123), row(100, 117),
    row(90, 110), row(80, 103), row(70, 97), row(60, 90), row(55, 78), row(50, 67),
    row(45, 55), row(40, 43), row(35, 31), row(30, 20), row(25, 8),
];

// 50-54

const RUN_2MILE_50_54: &[ScoreRow] = &[
    row(1050, 500), row(1065, 489), row(1080, 478), row(1095, 467), row(1110, 456), row(1125, 444),
    row(1140, 433), row(1155, 422), row(1170, 411), row(1185, 400), row(1200, 389), row(1215, 378),
    row(1230, 367), row(1245, 356), row(1260, 344), row(1275, 333), row(1290, 322), row(1305, 311),
    row(1320, 300), row(1350, 266), row(1380, 231), row(1410, 197), row(1440, 163), row(1470, 128),
    row(1500, 94), row(1530, 59), row(1560, 25),
];

const HAMR_50_54: &[ScoreRow] = &[
    row(56, 500), row(54, 487), row(52, 473), row(50, 460), row(48, 447), row(46, 433),
    row(44, 420), row(42, 407), row(40, 393), row(38, 380), row(36, 367), row(34, 353),
    row(32, 340), row(30, 327), row(28, 313), row(26, 300), row(24, 261), row(22, 221),
    row(20, 182), row(18, 143), row(16, 104), row(14, 64), row(12, 25),
];

const WALK_2KM_50_54: &[ScoreRow] = &[
    row(1200, 500), row(1215, 488), row(1230, 475), row(1245, 463), row(1260, 450), row(1275, 438),
    row(1290, 425), row(1305, 413), row(1320, 400), row(1335, 388), row(1350, 375), row(1365, 363),
    row(1380, 350), row(1395, 338), row(1410, 325), row(1425, 313), row(1440, 300), row(1470, 254),
    row(1500, 208), row(1530, 163), row(1560, 117), row(1590, 71), row(1620, 25),
];

const PUSHUPS_50_54: &[ScoreRow] = &[
    row(26, 150), row(24, 141), row(22, 133), row(20, 124), row(18, 116), row(16, 107),
    row(14, 99), row(12, 90), row(11, 74), row(10, 57), row(9, 41), row(8, 24),
    row(7, 8),
];

const HRPU_50_54: &[ScoreRow] = &[
    row(26, 150), row(24, 138), row(22, 126), row(20, 114), row(18, 102), row(16, 90),
    row(15, 82), row(14, 74), row(13, 65), row(12, 57), row(11, 49), row(10, 41),
    row(9, 33), row(8, 24), row(7, 16), row(6, 8),
];

const SITUPS_50_54: &[ScoreRow] = &[
    row(36, 150), row(34, 141), row(32, 133), row(30, 124), row(28, 116), row(26, 107),
    row(24, 99), row(22, 90), row(21, 80), row(20, 70), row(19, 59), row(18, 49),
    row(17, 39), row(16, 29), row(15, 18), row(14, 8),
];

const CLRC_50_54: &[ScoreRow] = &[
    row(34, 150), row(32, 141), row(30, 133), row(28, 124), row(26, 116), row(24, 107),
    row(22, 99), row(20, 90), row(19, 80), row(18, 70), row(17, 59), row(16, 49),
    row(15, 39), row(14, 29), row(13, 18), row(12, 8),
];

const PLANK_50_54: &[ScoreRow] = &[
    row(140, 150), row(130, 143), row(120, 136), row(110, 129), row(100, 122), row(90, 115),
    row(80, 108), row(70, 101), row(60, 94), row(55, 90), row(50, 78), row(45, 65),
    row(40, 53), row(35, 40), row(30, 28), row(25, 15), row(22, 8),
];

// 55-59

const RUN_2MILE_55_59: &[ScoreRow] = &[
    row(1070, 500), row(1085, 489), row(1100, 478), row(1115, 467), row(1130, 456), row(1145, 444),
    row(1160, 433), row(1175, 422), row(1190, 411), row(1205, 400), row(1220, 389), row(1235, 378),
    row(1250, 367), row(1265, 356), row(1280, 344), row(1295, 333), row(1310, 322), row(1325, 311),
    row(1340, 300), row(1370, 266), row(1400, 231), row(1430, 197), row(1460, 163), row(1490, 128),
    row(1520, 94), row(1550, 59), row(1580, 25),
];

const HAMR_55_59: &[ScoreRow] = &[
    row(52, 500), row(50, 486), row(48, 472), row(46, 459), row(44, 445), row(42, 431),
    row(40, 417), row(38, 403), row(36, 390), row(34, 376), row(32, 362), row(30, 348),
    row(28, 334), row(26, 321), row(24, 307), row(23, 300), row(21, 258), row(19, 215),
    row(17, 173), row(15, 131), row(13, 88), row(11, 46), row(10, 25),
];

const WALK_2KM_55_59: &[ScoreRow] = &[
    row(1220, 500), row(1235, 488), row(1250, 475), row(1265, 463), row(1280, 450), row(1295, 438),
    row(1310, 425), row(1325, 413), row(1340, 400), row(1355, 388), row(1370, 375), row(1385, 363),
    row(1400, 350), row(1415, 338), row(1430, 325), row(1445, 313), row(1460, 300), row(1490, 254),
    row(1520, 208), row(1550, 163), row(1580, 117), row(1610, 71), row(1640, 25),
];

const PUSHUPS_55_59: &[ScoreRow] = &[
    row(23, 150), row(21, 141), row(19, 132), row(17, 122), row(15, 113), row(13, 104),
    row(11, 95), row(10, 90), row(9, 70), row(8, 49), row(7, 29), row(6, 8),
];

const HRPU_55_59: &[ScoreRow] = &[
    row(24, 150), row(22, 137), row(20, 123), row(18, 110), row(16, 97), row(15, 90),
    row(14, 82), row(13, 74), row(12, 65), row(11, 57), row(10, 49), row(9, 41),
    row(8, 33), row(7, 24), row(6, 16), row(5, 8),
];

const SITUPS_55_59: &[ScoreRow] = &[
    row(33, 150), row(31, 141), row(29, 132), row(27, 122), row(25, 113), row(23, 104),
    row(21, 95), row(20, 90), row(19, 78), row(18, 67), row(17, 55), row(16, 43),
    row(15, 31), row(14, 20), row(13, 8),
];

const CLRC_55_59: &[ScoreRow] = &[
    row(31, 150), row(29, 141), row(27, 132), row(25, 122), row(23, 113), row(21, 104),
    row(19, 95), row(18, 90), row(17, 78), row(16, 67), row(15, 55), row(14, 43),
    row(13, 31), row(12, 20), row(11, 8),
];

const PLANK_55_59: &[ScoreRow] = &[
    row(130, 150), row(120, 143), row(110, 135), row(100, 128), row(90, 120), row(80, 113),
    row(70, 105), row(60, 98), row(50, 90), row(45, 77), row(40, 64), row(35, 50),
    row(30, 37), row(25, 24), row(20, 11), row(19, 8),
];

// 60+

const RUN_2MILE_60_PLUS: &[ScoreRow] = &[
    row(1090, 500), row(1105, 489), row(1120, 478), row(1135, 467), row(1150, 456), row(1165, 444),
    row(1180, 433), row(1195, 422), row(1210, 411), row(1225, 400), row(1240, 389), row(1255, 378),
    row(1270, 367), row(1285, 356), row(1300, 344), row(1315, 333), row(1330, 322), row(1345, 311),
    row(1360, 300), row(1390, 266), row(1420, 231), row(1450, 197), row(1480, 163), row(1510, 128),
    row(1540, 94), row(1570, 59), row(1600, 25),
];

const HAMR_60_PLUS: &[ScoreRow] = &[
    row(48, 500), row(46, 486), row(44, 471), row(42, 457), row(40, 443), row(38, 429),
    row(36, 414), row(34, 400), row(32, 386), row(30, 371), row(28, 357), row(26, 343),
    row(24, 329), row(22, 314), row(20, 300), row(18, 254), row(16, 208), row(14, 163),
    row(12, 117), row(10, 71), row(8, 25),
];

const WALK_2KM_60_PLUS: &[ScoreRow] = &[
    row(1240, 500), row(1255, 488), row(1270, 475), row(1285, 463), row(1300, 450), row(1315, 438),
    row(1330, 425), row(1345, 413), row(1360, 400), row(1375, 388), row(1390, 375), row(1405, 363),
    row(1420, 350), row(1435, 338), row(1450, 325), row(1465, 313), row(1480, 300), row(1510, 254),
    row(1540, 208), row(1570, 163), row(1600, 117), row(1630, 71), row(1660, 25),
];

const PUSHUPS_60_PLUS: &[ScoreRow] = &[
    row(20, 150), row(18, 140), row(16, 130), row(14, 120), row(12, 110), row(10, 100),
    row(8, 90), row(7, 63), row(6, 35), row(5, 8),
];

const HRPU_60_PLUS: &[ScoreRow] = &[
    row(22, 150), row(20, 135), row(18, 120), row(16, 105), row(14, 90), row(13, 82),
    row(12, 74), row(11, 65), row(10, 57), row(9, 49), row(8, 41), row(7, 33),
    row(6, 24), row(5, 16), row(4, 8),
];

const SITUPS_60_PLUS: &[ScoreRow] = &[
    row(30, 150), row(28, 140), row(26, 130), row(24, 120), row(22, 110), row(20, 100),
    row(18, 90), row(17, 76), row(16, 63), row(15, 49), row(14, 35), row(13, 22),
    row(12, 8),
];

const CLRC_60_PLUS: &[ScoreRow] = &[
    row(28, 150), row(26, 140), row(24, 130), row(22, 120), row(20, 110), row(18, 100),
    row(16, 90), row(15, 76), row(14, 63), row(13, 49), row(12, 35), row(11, 22),
    row(10, 8),
];

const PLANK_60_PLUS: &[ScoreRow] = &[
    row(120, 150), row(110, 142), row(100, 134), row(90, 126), row(80, 118), row(70, 110),
    row(60, 102), row(50, 94), row(45, 90), row(40, 76), row(35, 62), row(30, 48),
    row(25, 33), row(20, 19), row(16, 8),
];
