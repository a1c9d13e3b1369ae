//! Ticker universe and informational sector table.

use std::collections::BTreeMap;

/// Default scan universe, sorted and free of duplicates. The benchmark proxy
/// (QQQ) is part of it and is skipped by the scanner.
pub const UNIVERSE: &[&str] = &[
    "A", "AAL", "AAPL", "ABBV", "ABNB", "ABT", "ACN", "ADBE", "ADI", "ADSK", "AEM", "AEO",
    "AFL", "AFRM", "AI", "AIG", "AJG", "AKAM", "ALAB", "ALB", "ALGN", "ALK", "ALL", "ALLY",
    "ALNY", "AMAT", "AMD", "AME", "AMGN", "AMP", "AMZN", "ANF", "ANSS", "AON", "AOS", "APA",
    "APD", "APP", "AR", "ARM", "ARRY", "ARVN", "ASAN", "ASML", "ASX", "AVGO", "AVTR", "AXNX",
    "AXP", "AXTA", "AZN", "BA", "BAC", "BBY", "BDX", "BE", "BEAM", "BEN", "BF-B", "BIIB",
    "BILL", "BK", "BKNG", "BKR", "BLD", "BLDE", "BLK", "BLNK", "BMBL", "BMY", "BNTX", "BRO",
    "BSX", "BTU", "BUD", "CACC", "CAG", "CAKE", "CAT", "CB", "CC", "CCEP", "CCL", "CDNS",
    "CDW", "CE", "CELH", "CF", "CFG", "CHD", "CHGG", "CHKP", "CHPT", "CHRW", "CHWY", "CI",
    "CIEN", "CIVI", "CL", "CLF", "CLX", "CME", "CMG", "CMI", "CNC", "CNQ", "COF", "COIN",
    "COO", "COP", "COST", "COUR", "CPB", "CPNG", "CRDO", "CRK", "CRL", "CRM", "CRSP", "CRWD",
    "CSCO", "CTLT", "CTRA", "CTSH", "CTVA", "CVE", "CVNA", "CVS", "CVX", "CYBR", "CZR", "DAL",
    "DASH", "DD", "DDOG", "DE", "DELL", "DEO", "DG", "DGX", "DHR", "DIS", "DK", "DKNG", "DLTR",
    "DM", "DOCN", "DOCU", "DOMO", "DOV", "DOW", "DPZ", "DRI", "DRVN", "DT", "DUOL", "DVA",
    "DVN", "DXCM", "EA", "EAT", "ECL", "EDIT", "EL", "ELAN", "ELV", "EMN", "EMR", "ENB",
    "ENPH", "ENTG", "EOG", "EPAM", "EQT", "ET", "ETN", "ETSY", "EVGO", "EW", "EXEL", "EXPD",
    "EXPE", "EXTR", "F", "FANG", "FAST", "FATE", "FBIN", "FCX", "FDX", "FFIV", "FIS", "FISV",
    "FITB", "FLT", "FMC", "FNV", "FSLR", "FTAI", "FTI", "FTNT", "FUBO", "FVRR", "GD", "GE",
    "GEN", "GFS", "GIB", "GILD", "GIS", "GLW", "GM", "GMED", "GOLD", "GOOGL", "GPN", "GS",
    "GSK", "GTLB", "GWW", "HAL", "HALO", "HBAN", "HCA", "HD", "HIG", "HLT", "HMC", "HOLX",
    "HON", "HOOD", "HP", "HPE", "HPQ", "HRL", "HSY", "HUBS", "HUM", "IBM", "ICE", "ICUI",
    "IDXX", "IEX", "IFF", "ILMN", "IMO", "INCY", "INFY", "INTC", "IONQ", "IONS", "IOT", "IOVA",
    "IQV", "IR", "ISRG", "ITW", "IVZ", "JAZZ", "JBHT", "JCI", "JNJ", "JPM", "K", "KDP", "KEY",
    "KEYS", "KLAC", "KMB", "KMI", "KNX", "KO", "LCID", "LH", "LIN", "LLY", "LMND", "LMT",
    "LNG", "LOW", "LRCX", "LULU", "LUV", "LVS", "LYB", "LYFT", "MA", "MAR", "MAS", "MASI",
    "MAXN", "MCD", "MCHP", "MCO", "MDB", "MDLZ", "MDT", "MET", "META", "METC", "MGM", "MKC",
    "MKSI", "MMC", "MMM", "MNDY", "MNST", "MOH", "MOS", "MPC", "MQ", "MRK", "MRNA", "MRO",
    "MRVL", "MS", "MSFT", "MSI", "MTCH", "MTDR", "MU", "MYGN", "NAVI", "NBR", "NCLH", "NDAQ",
    "NEM", "NET", "NFLX", "NKE", "NNDM", "NOC", "NOVA", "NOW", "NTAP", "NTLA", "NTR", "NTRS",
    "NU", "NUE", "NVAX", "NVCR", "NVDA", "NVS", "NXPI", "ODFL", "OII", "OIS", "OKE", "OKTA",
    "OLN", "OMF", "ON", "OPRT", "ORCL", "OXY", "PACB", "PANW", "PATH", "PBF", "PCAR", "PEN",
    "PENN", "PEP", "PFE", "PG", "PGR", "PH", "PINS", "PLTK", "PLTR", "PLUG", "PNC", "PODD",
    "PPG", "PRU", "PSNY", "PSX", "PTC", "PTEN", "PYPL", "PZZA", "QCOM", "QLYS", "QQQ", "QRVO",
    "QSR", "QUBT", "RACE", "RBLX", "RCL", "REGN", "RES", "RF", "RGTI", "RIG", "RIVN", "RKLB",
    "RMD", "RNG", "ROKU", "ROOT", "ROP", "ROST", "RRC", "RSG", "RTX", "RUN", "S", "SAM", "SAP",
    "SATS", "SBUX", "SCCO", "SCHW", "SEDG", "SHOP", "SHW", "SJM", "SKLZ", "SLB", "SLM", "SM",
    "SMAR", "SMCI", "SMRT", "SNA", "SNAP", "SNDR", "SNOW", "SNPS", "SNY", "SOFI", "SOUN",
    "SOXL", "SPGI", "SPOT", "SQ", "SQM", "STEM", "STLA", "STLD", "STT", "STX", "STZ", "SU",
    "SWK", "SWKS", "SYF", "SYK", "SYM", "TAK", "TAP", "TDG", "TDY", "TEAM", "TECH", "TEN",
    "TENB", "TER", "TFC", "TFX", "TGT", "THC", "TJX", "TM", "TMO", "TNDM", "TPL", "TRMB",
    "TRMLF", "TROW", "TRP", "TRV", "TSLA", "TSM", "TSN", "TT", "TTD", "TTWO", "TWST", "TXN",
    "TXRH", "TYL", "U", "UAL", "UBER", "UHS", "ULTA", "UMC", "UNH", "UNP", "UPS", "UPST",
    "UPWK", "URBN", "URI", "USB", "V", "VEEV", "VLO", "VNOM", "VRM", "VRNS", "VRTX", "WAT",
    "WDAY", "WDC", "WFC", "WHD", "WING", "WIT", "WIX", "WLK", "WM", "WMB", "WMT", "WPM",
    "WTTR", "WTW", "WYNN", "XOM", "XPO", "XRAY", "XYL", "YUM", "ZBH", "ZM", "ZS", "ZTS",
];

/// Sector grouping. Informational only; the signal engine never reads it.
pub const SECTORS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["AAPL", "MSFT", "GOOGL", "META", "ORCL", "CRM", "ADBE", "NOW", "IBM", "CSCO"],
    ),
    (
        "Semiconductors",
        &["NVDA", "AMD", "AVGO", "QCOM", "INTC", "MU", "TXN", "ADI", "LRCX", "AMAT", "KLAC"],
    ),
    (
        "Energy",
        &["XOM", "CVX", "COP", "EOG", "OXY", "SLB", "HAL", "MPC", "VLO", "DVN"],
    ),
    (
        "Financials",
        &["JPM", "BAC", "GS", "MS", "WFC", "BLK", "SCHW", "AXP", "V", "MA"],
    ),
    (
        "Healthcare",
        &["JNJ", "UNH", "LLY", "ABBV", "MRK", "PFE", "ABT", "TMO", "AMGN", "CVS"],
    ),
    (
        "Consumer",
        &["AMZN", "TSLA", "HD", "LOW", "MCD", "SBUX", "NKE", "COST", "WMT", "TGT"],
    ),
    (
        "Industrials",
        &["CAT", "DE", "GE", "HON", "UNP", "BA", "LMT", "RTX", "UPS", "FDX"],
    ),
];

pub fn default_universe() -> Vec<String> {
    UNIVERSE.iter().map(|t| t.to_string()).collect()
}

/// Parse a comma separated ticker list: trimmed, upper-cased, blanks dropped,
/// first occurrence wins.
pub fn parse_list(raw: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for ticker in raw.split(',').map(|t| t.trim().to_uppercase()) {
        if !ticker.is_empty() && !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    tickers
}

/// Sector name to member tickers.
pub fn sectors() -> BTreeMap<&'static str, &'static [&'static str]> {
    SECTORS.iter().copied().collect()
}

/// Sector of a ticker, if it is listed in the table.
pub fn sector_of(ticker: &str) -> Option<&'static str> {
    SECTORS
        .iter()
        .find(|(_, members)| members.contains(&ticker))
        .map(|(name, _)| *name)
}
