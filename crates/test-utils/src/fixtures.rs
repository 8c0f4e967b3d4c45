//! Header fixtures for the two radial dialects.
//!
//! The CODAR header reproduces a SeaSonde LLUV file from the AMAG site
//! (Montauk). The WERA header reproduces a Helzel WERA LLUV file from the
//! GTN site (Georgetown). Table rows are produced by the generators.

/// CODAR column layout.
pub const CODAR_COLUMNS: &str =
    "LOND LATD VELU VELV VFLG ESPC ETMP MAXV MINV ERSC ERTC XDST YDST RNGE BEAR VELO HEAD SPRC";

/// WERA column layout.
pub const WERA_COLUMNS: &str = "LOND LATD VELU VELV EVAR EACC XDST YDST RNGE BEAR VELO HEAD";

/// AMAG antenna site (lat, lon).
pub const CODAR_ORIGIN: (f64, f64) = (40.9693333, -72.1237000);

/// GTN antenna site (lat, lon).
pub const WERA_ORIGIN: (f64, f64) = (33.356111, -79.152778);

/// Range resolution of the AMAG site (km).
pub const CODAR_RANGE_RESOLUTION_KM: f64 = 5.8249;

/// Header lines of the AMAG file, up to and including `TableStart:`.
pub const CODAR_HEADER: &str = r#"%CTF: 1.00
%FileType: LLUV rdls "RadialMap"
%LLUVSpec: 1.26  2016 10 07
%UUID: 379A036C-F505-43C5-AAA1-1CBE12739086
%Manufacturer: CODAR Ocean Sensors. SeaSonde
%Site: AMAG ""
%TimeStamp: 2018 02 14  00 00 00
%TimeZone: "UTC" +0.000 0 "Atlantic/Reykjavik"
%TimeCoverage: 180.000 Minutes
%Origin:  40.9693333  -72.1237000
%GreatCircle: "WGS84" 6378137.000  298.257223562997
%GeodVersion: "CGEO" 1.70  2014 09 09
%LLUVTrustData: all %% all lluv xyuv rbvd
%RangeStart: 2
%RangeEnd: 35
%RangeResolutionKMeters: 5.824900
%RangeCells: 49
%DopplerCells: 1024
%DopplerInterpolation: 2
%AntennaBearing: 214.0 True
%ReferenceBearing: 0 True
%AngularResolution: 5 Deg
%SpatialResolution: 5 Deg
%PatternType: Measured
%PatternDate: 2114 10 19  20 11 20
%PatternResolution: 1.0 deg
%PatternSmoothing: 10.0 deg
%PatternUUID: BAA8BFBD-958A-49BC-943C-B9EC205BBAF1
%TransmitCenterFreqMHz: 4.513000
%TransmitBandwidthKHz: -25.733913
%TransmitSweepRateHz: 1.000000
%DopplerResolutionHzPerBin: 0.000488281
%FirstOrderMethod: 0
%BraggSmoothingPoints: 4
%CurrentVelocityLimit: 100.0
%BraggHasSecondOrder: 0
%RadialBraggPeakDropOff: 100.000
%RadialBraggPeakNull: 10.000
%RadialBraggNoiseThreshold: 5.000
%PatternAmplitudeCorrections: 0.1735  0.1822
%PatternPhaseCorrections: -170.00  -132.00
%PatternAmplitudeCalculations: 0.0779  0.1947
%PatternPhaseCalculations: 119.30  -124.70
%RadialMusicParameters: 40.000 20.000 2.000
%RadialMinimumMergePoints: 2
%FirstOrderCalc: 1
%MergeMethod: 1 MedianVectors
%PatternMethod: 1 PatternVectors
%MergedCount: 5
%TableType: LLUV RDL9
%TableColumns: 18
%TableColumnTypes: LOND LATD VELU VELV VFLG ESPC ETMP MAXV MINV ERSC ERTC XDST YDST RNGE BEAR VELO HEAD SPRC
%TableRows: 672
%TableStart:
%%   Longitude   Latitude    U comp   V comp  VectorFlag    Spatial    Temporal     Velocity    Velocity  Spatial  Temporal X Distance  Y Distance   Range   Bearing   Velocity  Direction   Spectra
%%     (deg)       (deg)     (cm/s)   (cm/s)  (GridCode)    Quality     Quality     Maximum     Minimum    Count    Count      (km)        (km)       (km)   (True)    (cm/s)     (True)    RngCell
"#;

/// Footer lines of the AMAG file, after the table.
pub const CODAR_FOOTER: &str = r#"%TableEnd:
%%
%ProcessedTimeStamp: 2018 02 14  01 02 30
%ProcessingTool: "RadialMerger" 11.2.4
%ProcessingTool: "SpectraToRadial" 11.2.4
%End:
"#;

/// Header lines of the GTN file, up to and including `TableStart:`.
pub const WERA_HEADER: &str = r#"%CTF: 1.00
%FileType: LLUV rdls "RadialMap"
%LLUVSpec: 1.17  2009 07 08
%Manufacturer: Helzel WERA
%Site: GTN ""
%TimeStamp: 2018 02 14  00 23 00
%TimeZone: "UTC" +0.000 0
%TimeCoverage: 20.000 Minutes
%Origin:  33.3561110  -79.1527780
%GreatCircle: "WGS84" 6378137.000  298.257223562997
%GeodVersion: "WERA" 1.00  2009 07 08
%LLUVTrustData: all %% all lluv xyuv rbvd
%RangeStart: 1
%RangeEnd: 80
%RangeResolutionKMeters: 3.000000
%AntennaBearing: 120.0 True
%ReferenceBearing: 0 True
%TransmitCenterFreqMHz: 8.348000
%TableType: LLUV RDL7
%TableColumns: 12
%TableColumnTypes: LOND LATD VELU VELV EVAR EACC XDST YDST RNGE BEAR VELO HEAD
%TableStart:
%%   Longitude   Latitude    U comp   V comp   VelVar   Accuracy  X Distance  Y Distance   Range   Bearing   Velocity  Direction
"#;

/// Footer lines of the GTN file, after the table.
pub const WERA_FOOTER: &str = r#"%TableEnd:
%End:
"#;
