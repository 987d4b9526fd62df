use geohash_rs::{GeohashCell, GeohashError, decode};

fn main() -> Result<(), GeohashError> {
    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;

    let cell = GeohashCell::from_wgs84(&(lon, lat), 9)?;

    println!("Geohash: {}", cell.hash);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!("Error: ({}, {})", cell.lat_error, cell.lng_error);

    let (lat_str, lng_str) = decode(&cell.hash)?;
    println!("Rounded: ({}, {})", lat_str, lng_str);

    Ok(())
}
